use crate::units::{LitresPerMinute, MmPerHour, Metres, Millimeters, Minutes, SquareMetres};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// The irrigation system's enabled state. A plain `bool` would do, but the
/// two states have genuinely different behaviour (short-circuit vs. full
/// water-balance run), so they earn a sum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneEnabled {
    Enabled,
    Disabled,
}

impl Default for ZoneEnabled {
    fn default() -> Self {
        ZoneEnabled::Enabled
    }
}

/// Either the zone states its precipitation rate directly, or it is derived
/// from flow rate and area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PrecipitationSource {
    Explicit(MmPerHour),
    DeriveFromFlow,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GrassRef {
    pub name: String,
    /// crop coefficient, (0, 1]
    pub kc: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SoilRef {
    /// mm of available water per metre of root depth
    pub awhc_mm_per_m: f64,
    pub infiltration_mm_per_hr: MmPerHour,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPos {
    pub lat: f64,
    pub long: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: u32,
    pub label: String,
    #[serde(default)]
    pub enabled: ZoneEnabled,

    pub root_depth_m: Metres,
    /// allowable depletion fraction, (0, 1]
    pub allowable_depletion_fraction: f64,
    /// irrigation efficiency, (0, 1]
    pub efficiency: f64,

    pub flow_rate_l_per_min: LitresPerMinute,
    pub area_m2: SquareMetres,
    pub precipitation_source: PrecipitationSource,

    /// initial depletion, mm; may be absent/negative/oversized, clamped on entry
    pub current_depletion_mm: Option<Millimeters>,

    pub grass: GrassRef,
    pub soil: SoilRef,

    pub location: Option<GeoPos>,
}

impl Zone {
    pub fn precipitation_rate(&self) -> MmPerHour {
        match self.precipitation_source {
            PrecipitationSource::Explicit(rate) => rate,
            PrecipitationSource::DeriveFromFlow => {
                MmPerHour(60.0 * self.flow_rate_l_per_min.get() / self.area_m2.get())
            }
        }
    }

    /// Total Available Water, mm.
    pub fn taw(&self) -> Millimeters {
        Millimeters(self.soil.awhc_mm_per_m * self.root_depth_m.get())
    }

    /// Readily Available Water, mm.
    pub fn raw(&self, taw: Millimeters) -> Millimeters {
        taw * self.allowable_depletion_fraction
    }
}

/// One day of forecast input. Every field but the date is optional and
/// defaults to a value documented on each field.
///
/// `sunrise` carries whatever UTC offset the caller supplied (`FixedOffset`)
/// — the kernel never converts or normalizes it, only threads it through to
/// the matching output cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWeather {
    pub date: NaiveDate,
    pub et0_mm: Option<Millimeters>,
    pub rainfall_mm: Option<Millimeters>,
    pub sunrise: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrigationCycle {
    pub start_time: DateTime<FixedOffset>,
    pub duration_min: Minutes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationScheduleEntry {
    pub date: NaiveDate,
    pub zone_id: u32,
    pub cycles: Vec<IrrigationCycle>,
    pub applied_depth_mm: Millimeters,
    pub depletion_before_mm: Millimeters,
    pub depletion_after_mm: Millimeters,
}
