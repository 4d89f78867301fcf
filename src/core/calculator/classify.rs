//! Turns one shift record into its final hour buckets.

use crate::core::calculator::partition::partition;
use crate::core::calculator::window::DayWindow;
use crate::models::{
    Category, ClassifiedShift, HourBucket, NoteToken, NoteTokens, ShiftRecord, SkipReason,
    SupplementMarker,
};
use crate::utils::time::format_minutes;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Removes the unpaid break from the day bucket only, never below zero.
/// Returns the minutes actually removed.
pub fn deduct_break(bucket: &mut HourBucket, break_minutes: i64) -> i64 {
    bucket.draw(Category::Day, break_minutes)
}

/// One marker draws from night, then from day, and whatever it drew
/// becomes supplemental.
pub fn apply_marker(bucket: &mut HourBucket, marker: SupplementMarker) {
    let wanted = marker.minutes();
    let from_night = bucket.draw(Category::Night, wanted);
    let from_day = bucket.draw(Category::Day, wanted - from_night);
    bucket.supplemental += from_night + from_day;
}

/// Reinforcement shifts are paid as supplemental. Sunday minutes stay
/// Sunday when there are any; holiday minutes are never touched.
pub fn apply_renfort(bucket: &mut HourBucket) {
    if bucket.sunday <= 0 {
        bucket.move_to_supplemental(Category::Sunday);
    }
    bucket.move_to_supplemental(Category::Day);
    bucket.move_to_supplemental(Category::Night);
}

pub fn classify_shift(
    record: &ShiftRecord,
    holidays: &HashSet<NaiveDate>,
    window: &DayWindow,
) -> Result<ClassifiedShift, SkipReason> {
    if record.unpaid_break_minutes < 0 {
        return Err(SkipReason::NegativeBreak(format_minutes(
            record.unpaid_break_minutes,
        )));
    }
    if record.elapsed_minutes() <= 0 {
        return Err(SkipReason::EmptyInterval);
    }

    let partitioned = partition(record, holidays, window)?;
    let mut bucket = partitioned;

    let break_deducted = deduct_break(&mut bucket, record.unpaid_break_minutes);

    let tokens = NoteTokens::parse(&record.notes);
    for token in tokens.tokens() {
        match token {
            NoteToken::Supplement(marker) => apply_marker(&mut bucket, marker),
            NoteToken::Renfort => apply_renfort(&mut bucket),
        }
    }

    let negative = bucket.negative_categories();
    if !negative.is_empty() {
        tracing::error!(
            row = record.row,
            date = %record.date,
            categories = ?negative,
            "NegativeBucket: clamping to zero"
        );
        bucket.clamp_negative();
    }

    tracing::debug!(
        row = record.row,
        date = %record.date,
        day = bucket.day,
        night = bucket.night,
        sunday = bucket.sunday,
        holiday = bucket.holiday,
        supplemental = bucket.supplemental,
        "shift classified"
    );

    Ok(ClassifiedShift {
        record: record.clone(),
        partition: partitioned,
        break_deducted,
        tokens,
        bucket,
    })
}
