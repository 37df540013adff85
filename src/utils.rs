use chrono::{DateTime, Local, NaiveTime, Utc};

pub fn display_time(utc_time: chrono::DateTime<Utc>) -> String {
    let local_time = utc_time.with_timezone(&chrono::Local);
    local_time.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn timezone_offset() -> chrono::Duration {
    let local_time = Local::now();
    let utc_time = local_time.with_timezone(&Utc);
    local_time.naive_local() - utc_time.naive_utc()
}

/// 06:00:00, the default sunrise anchor when a day's forecast omits one.
pub fn default_sunrise() -> NaiveTime {
    NaiveTime::from_hms_opt(6, 0, 0).unwrap()
}

/// Round to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn start_log() {
    tracing_subscriber::fmt()
        .with_env_filter("zoneplan=debug")
        .with_target(false) // Hide target module info
        .init();
}
