//! Time utilities: parsing HH:MM, hour/minute conversions, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Accepts `HH:MM`, `HH:MM:SS` and a bare hour (`8` → 08:00).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    if !t.contains(':') {
        let hour: u32 = t.parse().ok()?;
        return NaiveTime::from_hms_opt(hour, 0, 0);
    }
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

pub fn parse_time_arg(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Whole minutes since midnight; seconds are truncated.
pub fn minute_of_day(t: NaiveTime) -> i64 {
    (t.num_seconds_from_midnight() / 60) as i64
}

pub fn hours_to_minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}

pub fn minutes_to_hours(mins: i64) -> f64 {
    mins as f64 / 60.0
}

/// Parses a decimal number written with either `.` or `,` (`"0,5"` → 0.5).
/// Blank input yields `None`.
pub fn parse_decimal(s: &str) -> Option<Result<f64, String>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Some(
        s.replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| s.to_string()),
    )
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
