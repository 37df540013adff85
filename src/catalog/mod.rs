//! Static agronomic lookup tables — the kernel never calls into these
//! directly — callers resolve a zone's `grass`/`soil` reference against a
//! catalogue before building the `Zone` the kernel consumes. Lookup failure
//! is the catalogue's concern, never the kernel's.

pub mod grass;
pub mod soil;
