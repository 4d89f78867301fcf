use crate::errors::{AppError, AppResult};
use crate::utils::time::{minute_of_day, parse_time_arg};
use chrono::NaiveTime;

/// Clock window paid at the day rate; everything outside it is night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start: i64,
    end: i64,
}

impl Default for DayWindow {
    fn default() -> Self {
        Self {
            start: 6 * 60,
            end: 21 * 60,
        }
    }
}

impl DayWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> AppResult<Self> {
        let (start, end) = (minute_of_day(start), minute_of_day(end));
        if start >= end {
            return Err(AppError::Config(format!(
                "day window must start before it ends ({start} >= {end} minutes)"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        Self::new(parse_time_arg(start)?, parse_time_arg(end)?)
    }

    /// Minutes of `[from, to)` (minutes since midnight, `0..=1440`) that fall
    /// inside the window.
    pub fn overlap(&self, from: i64, to: i64) -> i64 {
        (to.min(self.end) - from.max(self.start)).max(0)
    }

    pub fn contains(&self, minute: i64) -> bool {
        (self.start..self.end).contains(&minute)
    }
}
