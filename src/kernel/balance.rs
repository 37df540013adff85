//! The daily soil-water-balance state machine. The kernel's single
//! public entry point, `plan_zone_schedule`, lives here.

use super::cycles::plan_cycles;
use super::hydraulics::HydraulicProfile;
use super::types::{DailyWeather, IrrigationScheduleEntry, PrecipitationSource, Zone, ZoneEnabled};
use crate::error::AppError;
use crate::units::Millimeters;
use crate::utils::{default_sunrise, round1};
use tracing::debug;

const LIGHT_RAIN_THRESHOLD_MM: f64 = 2.0;
const EFFECTIVE_RAIN_FACTOR: f64 = 0.8;

/// Defensively validate the caller-supplied zone. These are the caller's
/// responsibility to avoid, but the kernel refuses to turn them into `NaN`
/// output rather than silently producing nonsense.
fn validate(zone: &Zone) -> Result<(), AppError> {
    if zone.root_depth_m.get() <= 0.0 {
        return Err(AppError::ConfigurationInvalid("root depth must be positive".into()));
    }
    if zone.soil.awhc_mm_per_m <= 0.0 {
        return Err(AppError::ConfigurationInvalid("soil AWHC must be positive".into()));
    }
    if !(0.0 < zone.allowable_depletion_fraction && zone.allowable_depletion_fraction <= 1.0) {
        return Err(AppError::ConfigurationInvalid("allowable depletion fraction must be in (0, 1]".into()));
    }
    if !(0.0 < zone.efficiency && zone.efficiency <= 1.0) {
        return Err(AppError::ConfigurationInvalid("irrigation efficiency must be in (0, 1]".into()));
    }
    if !(0.0 < zone.grass.kc && zone.grass.kc <= 1.0) {
        return Err(AppError::ConfigurationInvalid("crop coefficient must be in (0, 1]".into()));
    }
    match zone.precipitation_source {
        PrecipitationSource::Explicit(rate) => {
            if rate.get() <= 0.0 {
                return Err(AppError::ConfigurationInvalid("precipitation rate must be positive".into()));
            }
        }
        PrecipitationSource::DeriveFromFlow => {
            if zone.flow_rate_l_per_min.get() <= 0.0 {
                return Err(AppError::ConfigurationInvalid(
                    "flow rate must be positive when precipitation rate is derived".into(),
                ));
            }
            if zone.area_m2.get() <= 0.0 {
                return Err(AppError::ConfigurationInvalid("area must be positive when precipitation rate is derived".into()));
            }
        }
    }
    Ok(())
}

/// Compute the day-by-day irrigation schedule for a single zone.
///
/// Pure and total over a validated zone: no I/O, no shared state, identical
/// inputs produce identical outputs.
pub fn plan_zone_schedule(zone: &Zone, weather: &[DailyWeather]) -> Result<Vec<IrrigationScheduleEntry>, AppError> {
    validate(zone)?;

    if zone.enabled == ZoneEnabled::Disabled {
        return Ok(Vec::new());
    }

    let taw = zone.taw();
    let raw = zone.raw(taw);
    let profile = HydraulicProfile::for_zone(zone);

    let mut depletion = zone.current_depletion_mm.unwrap_or(Millimeters(0.0)).clamp(0.0, taw.get());

    let mut entries = Vec::with_capacity(weather.len());

    for day in weather {
        let sunrise = day.sunrise.unwrap_or_else(|| {
            // No offset was supplied for this day at all; default to 06:00 UTC.
            let utc = chrono::FixedOffset::east_opt(0).unwrap();
            day.date.and_time(default_sunrise()).and_local_timezone(utc).single().expect("fixed offset is always unambiguous")
        });

        let et0 = day.et0_mm.unwrap_or(Millimeters(0.0)).max(0.0);
        let etc = Millimeters(zone.grass.kc * et0.get());

        let rainfall = day.rainfall_mm.unwrap_or(Millimeters(0.0));
        let effective_rain = if rainfall.get() < LIGHT_RAIN_THRESHOLD_MM {
            Millimeters(0.0)
        } else {
            rainfall * EFFECTIVE_RAIN_FACTOR
        };

        depletion = (depletion + etc - effective_rain).clamp(0.0, taw.get());

        if depletion.get() >= raw.get() {
            let depletion_before = depletion;

            let net = depletion_before;
            let gross = Millimeters((net.get() / zone.efficiency).min(taw.get()));

            let total_runtime_min = crate::units::Minutes(gross / profile.precipitation_rate * 60.0);
            let cycles = plan_cycles(total_runtime_min, profile.max_cycle, sunrise, profile.soak);

            depletion = Millimeters(0.0);

            debug!(
                zone = zone.id,
                date = %day.date,
                depletion_before = depletion_before.get(),
                applied = gross.get(),
                "irrigation event"
            );

            entries.push(IrrigationScheduleEntry {
                date: day.date,
                zone_id: zone.id,
                cycles,
                applied_depth_mm: Millimeters(round1(gross.get())),
                depletion_before_mm: Millimeters(round1(depletion_before.get())),
                depletion_after_mm: Millimeters(0.0),
            });

            // re-apply the same day's ET/rain after the refill
            depletion = (Millimeters(0.0) + etc - effective_rain).clamp(0.0, taw.get());
        }

        depletion = depletion.clamp(0.0, taw.get());
    }

    Ok(entries)
}
