//! Pure derivations from a zone's physical configuration.

use super::types::Zone;
use crate::units::{MmPerHour, Minutes};

#[derive(Debug, Clone, Copy)]
pub struct HydraulicProfile {
    pub precipitation_rate: MmPerHour,
    /// `None` means unbounded: a single cycle regardless of total runtime.
    pub max_cycle: Option<Minutes>,
    pub soak: Minutes,
}

impl HydraulicProfile {
    pub fn for_zone(zone: &Zone) -> Self {
        let precipitation_rate = zone.precipitation_rate();
        let infiltration = zone.soil.infiltration_mm_per_hr;

        let max_cycle = if infiltration.get() > 0.0 {
            Some(Minutes(infiltration.get() / precipitation_rate.get() * 60.0))
        } else {
            None
        };

        HydraulicProfile { precipitation_rate, max_cycle, soak: soak_minutes(infiltration) }
    }
}

/// Soak interval between cycles, piecewise constant in soil infiltration rate.
pub fn soak_minutes(infiltration: MmPerHour) -> Minutes {
    let rate = infiltration.get();
    let minutes = if rate >= 20.0 {
        15.0
    } else if rate >= 12.0 {
        25.0
    } else if rate >= 8.0 {
        35.0
    } else if rate >= 5.0 {
        45.0
    } else {
        60.0
    };
    Minutes(minutes)
}
