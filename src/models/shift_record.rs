use crate::utils::time::{MINUTES_PER_DAY, hours_to_minutes, minute_of_day};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One worked shift, as read from one row of the source timesheet.
///
/// Durations are kept in whole minutes so that classification is exact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftRecord {
    /// 1-based data row in the source table (0 when built in code).
    pub row: usize,
    pub date: NaiveDate, // day the shift is anchored to
    pub start: NaiveTime,
    pub end: NaiveTime, // may be earlier than `start`: shift ends the next day
    pub unpaid_break_minutes: i64,
    pub declared_minutes: i64, // "Total (h)" column, kept for display
    pub notes: String,         // lowercase
}

impl ShiftRecord {
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            row: 0,
            date,
            start,
            end,
            unpaid_break_minutes: 0,
            declared_minutes: 0,
            notes: String::new(),
        }
    }

    pub fn with_row(mut self, row: usize) -> Self {
        self.row = row;
        self
    }

    pub fn with_break_hours(mut self, hours: f64) -> Self {
        self.unpaid_break_minutes = hours_to_minutes(hours);
        self
    }

    pub fn with_declared_hours(mut self, hours: f64) -> Self {
        self.declared_minutes = hours_to_minutes(hours);
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.trim().to_lowercase();
        self
    }

    /// `[start, end)` in minutes from midnight of `date`. An end earlier
    /// than the start (by clock) belongs to the following day.
    pub fn normalized_minutes(&self) -> (i64, i64) {
        let start = minute_of_day(self.start);
        let mut end = minute_of_day(self.end);
        if self.end < self.start {
            end += MINUTES_PER_DAY;
        }
        (start, end)
    }

    /// Elapsed whole minutes of the normalized interval.
    pub fn elapsed_minutes(&self) -> i64 {
        let (start, end) = self.normalized_minutes();
        end - start
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }
}
