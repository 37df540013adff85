use chrono::NaiveDate;
use zoneplan::kernel::{
    DailyWeather, GrassRef, PrecipitationSource, SoilRef, Zone, ZoneEnabled,
};
use zoneplan::units::{LitresPerMinute, Metres, Millimeters, MmPerHour, SquareMetres};

/// A zone matching the seed suite's shared defaults: Kc 0.85, AWHC 150 mm/m,
/// infiltration 25 mm/hr, root depth 0.3 m (TAW 45 mm, RAW 22.5 mm at ADF
/// 0.5), efficiency 0.8, flow 15 L/min, area 100 m2, explicit precipitation
/// rate 9 mm/hr.
pub fn mock_zone(id: u32, current_depletion_mm: f64) -> Zone {
    Zone {
        id,
        label: format!("zone-{id}"),
        enabled: ZoneEnabled::Enabled,
        root_depth_m: Metres(0.3),
        allowable_depletion_fraction: 0.5,
        efficiency: 0.8,
        flow_rate_l_per_min: LitresPerMinute(15.0),
        area_m2: SquareMetres(100.0),
        precipitation_source: PrecipitationSource::Explicit(MmPerHour(9.0)),
        current_depletion_mm: Some(Millimeters(current_depletion_mm)),
        grass: GrassRef { name: "kentucky_bluegrass".to_string(), kc: 0.85 },
        soil: SoilRef { awhc_mm_per_m: 150.0, infiltration_mm_per_hr: MmPerHour(25.0) },
        location: None,
    }
}

pub fn mock_day(date: NaiveDate, et0_mm: f64, rainfall_mm: f64) -> DailyWeather {
    DailyWeather { date, et0_mm: Some(Millimeters(et0_mm)), rainfall_mm: Some(Millimeters(rainfall_mm)), sunrise: None }
}

pub fn mock_week(start: NaiveDate, et0_mm: f64, rainfall_mm: f64) -> Vec<DailyWeather> {
    (0..7).map(|offset| mock_day(start + chrono::Duration::days(offset), et0_mm, rainfall_mm)).collect()
}
