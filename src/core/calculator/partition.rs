//! Splits the elapsed interval of a shift into holiday, Sunday, day and
//! night minutes.
//!
//! Precedence for every minute: holiday, then Sunday, then the day window,
//! else night. The interval is cut at midnight and each calendar-date
//! segment is classified in one piece, which gives the same result as
//! walking the shift minute by minute.

use crate::core::calculator::window::DayWindow;
use crate::models::{Category, HourBucket, ShiftRecord, SkipReason};
use crate::utils::time::MINUTES_PER_DAY;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashSet;

/// Category of the minute starting at `minute` (minutes since midnight)
/// on `date`.
pub fn category_at(
    date: NaiveDate,
    minute: i64,
    holidays: &HashSet<NaiveDate>,
    window: &DayWindow,
) -> Category {
    if holidays.contains(&date) {
        Category::Holiday
    } else if date.weekday() == Weekday::Sun {
        Category::Sunday
    } else if window.contains(minute) {
        Category::Day
    } else {
        Category::Night
    }
}

pub fn partition(
    record: &ShiftRecord,
    holidays: &HashSet<NaiveDate>,
    window: &DayWindow,
) -> Result<HourBucket, SkipReason> {
    let (start, end) = record.normalized_minutes();
    let mut bucket = HourBucket::default();

    let mut cursor = start;
    while cursor < end {
        let day_index = cursor.div_euclid(MINUTES_PER_DAY);
        let offset = day_index * MINUTES_PER_DAY;
        let seg_end = end.min(offset + MINUTES_PER_DAY);
        let len = seg_end - cursor;

        let date = record
            .date
            .checked_add_signed(Duration::days(day_index))
            .ok_or_else(|| SkipReason::InvalidDate(record.date_str()))?;

        match category_at(date, cursor - offset, holidays, window) {
            Category::Day | Category::Night => {
                let day = window.overlap(cursor - offset, seg_end - offset);
                bucket.add(Category::Day, day);
                bucket.add(Category::Night, len - day);
            }
            whole => bucket.add(whole, len),
        }

        cursor = seg_end;
    }

    Ok(bucket)
}
