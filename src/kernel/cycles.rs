//! The hydraulic cycle planner.

use super::types::IrrigationCycle;
use crate::units::Minutes;
use crate::utils::round1;
use chrono::{DateTime, FixedOffset};

/// Split a total runtime into one or more equal-length cycles ending at
/// `sunrise`, each no longer than `max_cycle`, separated by `soak` minutes
/// of idle soil recovery.
///
/// Total `T` and max cycle `M` are both in minutes. `max_cycle == None`
/// means the cycle is unbounded: always a single cycle.
pub fn plan_cycles(
    total_runtime: Minutes, max_cycle: Option<Minutes>, sunrise: DateTime<FixedOffset>, soak: Minutes,
) -> Vec<IrrigationCycle> {
    if total_runtime.get() <= 0.0 {
        return Vec::new();
    }

    let single = |duration: f64| {
        vec![IrrigationCycle {
            start_time: sunrise - minutes_duration(duration),
            duration_min: Minutes(round1(duration)),
        }]
    };

    let max = match max_cycle {
        Some(m) if m.get() > 0.0 => m.get(),
        _ => return single(total_runtime.get()),
    };

    if total_runtime.get() <= max {
        return single(total_runtime.get());
    }

    let n = (total_runtime.get() / max).ceil() as i64;
    let d = total_runtime.get() / n as f64;

    // cycle i (1 = latest) ends at sunrise - (i-1) * (d + soak)
    let mut cycles: Vec<IrrigationCycle> = (1..=n)
        .map(|i| {
            let offset_minutes = (i - 1) as f64 * (d + soak.get());
            let end = sunrise - minutes_duration(offset_minutes);
            let start = end - minutes_duration(d);
            IrrigationCycle { start_time: start, duration_min: Minutes(round1(d)) }
        })
        .collect();

    cycles.reverse(); // chronological order, earliest first
    cycles
}

fn minutes_duration(minutes: f64) -> chrono::Duration {
    chrono::Duration::seconds((minutes * 60.0).round() as i64)
}
