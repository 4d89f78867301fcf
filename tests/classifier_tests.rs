mod common;
use common::{d, shift};
use rshifthours::classify_shift;
use rshifthours::core::calculator::classify::{apply_marker, apply_renfort, deduct_break};
use rshifthours::core::calculator::window::DayWindow;
use rshifthours::core::calendar::HolidayCalendar;
use rshifthours::models::{HourBucket, NoteTokens, ShiftRecord, SkipReason};
use chrono::NaiveDate;
use std::collections::HashSet;

fn holidays() -> HashSet<NaiveDate> {
    HolidayCalendar::default().dates_for_years([2023, 2025, 2026])
}

fn classify(record: &ShiftRecord) -> HourBucket {
    classify_shift(record, &holidays(), &DayWindow::default())
        .expect("valid shift")
        .bucket
}

// 2025-03-04 is a Tuesday, 2025-03-09 a Sunday.

#[test]
fn test_weekday_day_shift_with_break() {
    let rec = shift(d(2025, 3, 4), (8, 0), (16, 0)).with_break_hours(0.5);
    let b = classify(&rec);

    assert_eq!(b.day, 450);
    assert_eq!(b.night, 0);
    assert_eq!(b.sunday, 0);
    assert_eq!(b.holiday, 0);
    assert_eq!(b.supplemental, 0);
}

#[test]
fn test_overnight_shift_is_all_night() {
    let rec = shift(d(2025, 3, 4), (23, 0), (1, 0));
    let b = classify(&rec);

    assert_eq!(rec.elapsed_minutes(), 120);
    assert_eq!(b.night, 120);
    assert_eq!(b.day, 0);
}

#[test]
fn test_day_window_boundaries() {
    let early = classify(&shift(d(2025, 3, 4), (5, 0), (7, 0)));
    assert_eq!((early.day, early.night), (60, 60));

    let late = classify(&shift(d(2025, 3, 4), (20, 30), (21, 30)));
    assert_eq!((late.day, late.night), (30, 30));

    // 21:00 itself is already night
    let at_end = classify(&shift(d(2025, 3, 4), (21, 0), (22, 0)));
    assert_eq!((at_end.day, at_end.night), (0, 60));
}

#[test]
fn test_sunday_shift() {
    let b = classify(&shift(d(2025, 3, 9), (8, 0), (16, 0)).with_break_hours(1.0));

    assert_eq!(b.sunday, 480);
    assert_eq!(b.day, 0);
    assert_eq!(b.night, 0);
}

#[test]
fn test_saturday_night_into_sunday() {
    let b = classify(&shift(d(2025, 3, 8), (22, 0), (6, 0)));

    assert_eq!(b.night, 120);
    assert_eq!(b.sunday, 360);
}

#[test]
fn test_sunday_holiday_counts_as_holiday() {
    // 2023-01-01 was a Sunday
    let rec = shift(d(2023, 1, 1), (10, 0), (18, 0));
    let b = classify(&rec);

    assert_eq!(b.holiday, rec.elapsed_minutes());
    assert_eq!(b.sunday, 0);
}

#[test]
fn test_break_is_never_taken_from_holiday() {
    let rec = shift(d(2025, 5, 1), (8, 0), (16, 0)).with_break_hours(1.0);
    let out = classify_shift(&rec, &holidays(), &DayWindow::default()).expect("valid");

    assert_eq!(out.bucket.holiday, 480);
    assert_eq!(out.break_deducted, 0);
}

#[test]
fn test_break_larger_than_day_bucket() {
    let rec = shift(d(2025, 3, 4), (20, 0), (23, 0)).with_break_hours(2.0);
    let out = classify_shift(&rec, &holidays(), &DayWindow::default()).expect("valid");

    assert_eq!(out.bucket.day, 0);
    assert_eq!(out.bucket.night, 120);
    assert_eq!(out.break_deducted, 60);
}

#[test]
fn test_supplement_marker_from_day() {
    let b = classify(&shift(d(2025, 3, 4), (8, 0), (16, 0)).with_notes("+1h"));

    assert_eq!(b.day, 420);
    assert_eq!(b.supplemental, 60);
    assert_eq!(b.night, 0);
}

#[test]
fn test_supplement_marker_prefers_night() {
    // 18:00-21:00 day, 21:00-02:00 night
    let b = classify(&shift(d(2025, 3, 4), (18, 0), (2, 0)).with_notes("+2h"));

    assert_eq!(b.day, 180);
    assert_eq!(b.night, 180);
    assert_eq!(b.supplemental, 120);
}

#[test]
fn test_supplement_marker_splits_night_then_day() {
    let b = classify(&shift(d(2025, 3, 4), (20, 0), (22, 0)).with_notes("+1.5h"));

    assert_eq!(b.night, 0);
    assert_eq!(b.day, 30);
    assert_eq!(b.supplemental, 90);
}

#[test]
fn test_multiple_markers_are_cumulative() {
    let b = classify(&shift(d(2025, 3, 4), (8, 0), (16, 0)).with_notes("+2.5h puis +0.5h"));

    assert_eq!(b.day, 300);
    assert_eq!(b.supplemental, 180);
}

#[test]
fn test_marker_larger_than_remaining_hours() {
    let rec = shift(d(2025, 3, 4), (6, 0), (7, 0)).with_notes("+2.5h");
    let b = classify(&rec);

    assert_eq!(b.day, 0);
    assert_eq!(b.supplemental, 60);
    assert_eq!(b.total(), rec.elapsed_minutes());
}

#[test]
fn test_renfort_weekday_moves_everything() {
    let b = classify(&shift(d(2025, 3, 4), (18, 0), (2, 0)).with_notes("Renfort"));

    assert_eq!(b.day, 0);
    assert_eq!(b.night, 0);
    assert_eq!(b.supplemental, 480);
}

#[test]
fn test_renfort_keeps_sunday_hours() {
    let mut b = HourBucket {
        day: 180,
        night: 60,
        sunday: 120,
        ..Default::default()
    };
    apply_renfort(&mut b);

    assert_eq!(b.sunday, 120);
    assert_eq!(b.day, 0);
    assert_eq!(b.night, 0);
    assert_eq!(b.supplemental, 240);
}

#[test]
fn test_renfort_sunday_evening_into_monday() {
    let b = classify(&shift(d(2025, 3, 9), (20, 0), (2, 0)).with_notes("renfort"));

    assert_eq!(b.sunday, 240);
    assert_eq!(b.night, 0);
    assert_eq!(b.supplemental, 120);
}

#[test]
fn test_renfort_leaves_holiday_untouched() {
    let b = classify(&shift(d(2025, 5, 1), (8, 0), (16, 0)).with_notes("renfort"));

    assert_eq!(b.holiday, 480);
    assert_eq!(b.supplemental, 0);
}

#[test]
fn test_renfort_after_markers() {
    let b = classify(&shift(d(2025, 3, 4), (8, 0), (16, 0)).with_notes("renfort +1h"));

    assert_eq!(b.day, 0);
    assert_eq!(b.supplemental, 480);
}

#[test]
fn test_step_helpers_never_go_negative() {
    let mut b = HourBucket {
        day: 20,
        night: 10,
        ..Default::default()
    };
    assert_eq!(deduct_break(&mut b, 45), 20);

    for marker in NoteTokens::parse("+2.5h +2h").supplements_descending() {
        apply_marker(&mut b, marker);
    }

    assert_eq!(b.day, 0);
    assert_eq!(b.night, 0);
    assert_eq!(b.supplemental, 10);
    assert!(b.negative_categories().is_empty());
}

#[test]
fn test_empty_interval_is_rejected() {
    let rec = shift(d(2025, 3, 4), (8, 0), (8, 0));
    let err = classify_shift(&rec, &holidays(), &DayWindow::default()).unwrap_err();
    assert_eq!(err, SkipReason::EmptyInterval);
}

#[test]
fn test_negative_break_is_rejected() {
    let rec = shift(d(2025, 3, 4), (8, 0), (16, 0)).with_break_hours(-1.0);
    let err = classify_shift(&rec, &holidays(), &DayWindow::default()).unwrap_err();
    assert!(matches!(err, SkipReason::NegativeBreak(_)));
}

#[test]
fn test_classification_is_idempotent() {
    let rec = shift(d(2025, 3, 8), (19, 17), (7, 43))
        .with_break_hours(0.75)
        .with_notes("+1h renfort");

    let first = classify_shift(&rec, &holidays(), &DayWindow::default()).expect("valid");
    let second = classify_shift(&rec, &holidays(), &DayWindow::default()).expect("valid");
    assert_eq!(first.bucket, second.bucket);
    assert_eq!(first.partition, second.partition);
}

#[test]
fn test_custom_day_window() {
    let window = DayWindow::parse("07:00", "20:00").expect("window");
    let rec = shift(d(2025, 3, 4), (6, 0), (21, 0));
    let b = classify_shift(&rec, &holidays(), &window)
        .expect("valid")
        .bucket;

    assert_eq!(b.day, 13 * 60);
    assert_eq!(b.night, 120);
    assert!(DayWindow::parse("21:00", "06:00").is_err());
}

#[test]
fn test_accounting_identity_holds_everywhere() {
    let hol = holidays();
    let window = DayWindow::default();
    let notes = ["", "+0.5h", "+2.5h +1h", "renfort", "renfort +2h"];
    // Sat, Sun, holiday Thursday, plain Tuesday, New Year's Eve
    let dates = [
        d(2025, 3, 8),
        d(2025, 3, 9),
        d(2025, 5, 1),
        d(2025, 3, 4),
        d(2025, 12, 31),
    ];

    for date in dates {
        for start_h in (0..24).step_by(5) {
            for end_h in (0..24).step_by(7) {
                for (i, note) in notes.iter().enumerate() {
                    let rec = shift(date, (start_h, 15), (end_h, 45))
                        .with_break_hours(i as f64 * 0.5)
                        .with_notes(note);

                    let out = classify_shift(&rec, &hol, &window).expect("valid");
                    assert_eq!(out.partition.total(), rec.elapsed_minutes());
                    assert_eq!(out.partition.supplemental, 0);
                    assert!(out.bucket.negative_categories().is_empty());
                    assert_eq!(
                        out.bucket.total(),
                        rec.elapsed_minutes() - out.break_deducted,
                        "identity broken for {rec:?}"
                    );
                }
            }
        }
    }
}
