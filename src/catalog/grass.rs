/// Turfgrass species keyed by name, each with a crop coefficient Kc in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrassSpecies {
    Bermuda,
    KentuckyBluegrass,
    TallFescue,
    Zoysia,
    StAugustine,
}

const TABLE: &[(GrassSpecies, &str, f64)] = &[
    (GrassSpecies::Bermuda, "bermuda", 0.80),
    (GrassSpecies::KentuckyBluegrass, "kentucky_bluegrass", 0.85),
    (GrassSpecies::TallFescue, "tall_fescue", 0.85),
    (GrassSpecies::Zoysia, "zoysia", 0.75),
    (GrassSpecies::StAugustine, "st_augustine", 0.80),
];

impl GrassSpecies {
    pub fn kc(self) -> f64 {
        TABLE.iter().find(|(s, ..)| *s == self).map(|(_, _, kc)| *kc).expect("every variant is in TABLE")
    }

    pub fn name(self) -> &'static str {
        TABLE.iter().find(|(s, ..)| *s == self).map(|(_, n, _)| *n).expect("every variant is in TABLE")
    }
}

/// Look up a grass species by name, case-insensitively. `None` on a miss —
/// the catalogue's concern, never the kernel's.
pub fn lookup(name: &str) -> Option<GrassSpecies> {
    let needle = name.to_lowercase();
    TABLE.iter().find(|(_, n, _)| *n == needle).map(|(s, ..)| *s)
}
