//! The irrigation scheduling kernel: a pure function over plain data.
//!
//! `hydraulics` and `cycles` are leaves; `balance` composes them into the
//! single public operation, [`balance::plan_zone_schedule`].

pub mod balance;
pub mod cycles;
pub mod hydraulics;
pub mod types;

pub use balance::plan_zone_schedule;
pub use types::{
    DailyWeather, GeoPos, GrassRef, IrrigationCycle, IrrigationScheduleEntry, PrecipitationSource, SoilRef, Zone,
    ZoneEnabled,
};
