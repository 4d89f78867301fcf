mod common;
use chrono::{Duration, NaiveDate};
use common::{d, shift};
use rshifthours::core::calculator::partition::{category_at, partition};
use rshifthours::core::calculator::window::DayWindow;
use rshifthours::core::calendar::HolidayCalendar;
use rshifthours::models::{Category, HourBucket, ShiftRecord};
use rshifthours::utils::time::MINUTES_PER_DAY;
use std::collections::HashSet;

/// Reference: classify the shift one minute at a time.
fn sweep(rec: &ShiftRecord, holidays: &HashSet<NaiveDate>, window: &DayWindow) -> HourBucket {
    let (start, end) = rec.normalized_minutes();
    let mut b = HourBucket::default();
    for m in start..end {
        let date = rec.date + Duration::days(m.div_euclid(MINUTES_PER_DAY));
        b.add(
            category_at(date, m.rem_euclid(MINUTES_PER_DAY), holidays, window),
            1,
        );
    }
    b
}

#[test]
fn test_closed_form_matches_minute_sweep() {
    let holidays = HolidayCalendar::default().dates_for_years([2024, 2025]);
    let window = DayWindow::default();

    // Sat, Sun, holiday Monday, Wednesday before a holiday, New Year's Eve
    let dates = [
        d(2025, 3, 8),
        d(2025, 3, 9),
        d(2025, 4, 21),
        d(2025, 4, 30),
        d(2024, 12, 31),
    ];

    for date in dates {
        for start in (0..24 * 60).step_by(47) {
            for end in (0..24 * 60).step_by(61) {
                if start == end {
                    continue;
                }
                let rec = shift(date, (start / 60, start % 60), (end / 60, end % 60));
                assert_eq!(
                    partition(&rec, &holidays, &window).expect("partition"),
                    sweep(&rec, &holidays, &window),
                    "mismatch for {rec:?}"
                );
            }
        }
    }
}

#[test]
fn test_category_precedence() {
    let holidays: HashSet<NaiveDate> = [d(2023, 1, 1)].into_iter().collect();
    let window = DayWindow::default();

    // Sunday holiday
    assert_eq!(category_at(d(2023, 1, 1), 600, &holidays, &window), Category::Holiday);
    // plain Sunday, in and out of the day window
    assert_eq!(category_at(d(2023, 1, 8), 600, &holidays, &window), Category::Sunday);
    assert_eq!(category_at(d(2023, 1, 8), 60, &holidays, &window), Category::Sunday);
    // Monday
    assert_eq!(category_at(d(2023, 1, 9), 6 * 60, &holidays, &window), Category::Day);
    assert_eq!(category_at(d(2023, 1, 9), 21 * 60, &holidays, &window), Category::Night);
}

#[test]
fn test_new_years_eve_crosses_into_holiday() {
    let holidays = HolidayCalendar::default().dates_for_years([2025, 2026]);
    // 2025-12-31 is a Wednesday
    let rec = shift(d(2025, 12, 31), (22, 0), (2, 0));
    let b = partition(&rec, &holidays, &DayWindow::default()).expect("partition");

    assert_eq!(b.night, 120);
    assert_eq!(b.holiday, 120);
}
