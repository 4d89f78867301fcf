use chrono::{Datelike, NaiveDate, Weekday};

/// Accepts ISO dates (`2025-05-01`) and day-first dates (`01/05/2025`,
/// `01-05-2025`, `01.05.2025`).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    // spreadsheets sometimes paste a midnight time after the date
    let s = s.split_whitespace().next().unwrap_or(s);

    ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

pub fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1).map(|d| d.year())
}

pub fn weekday_short(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
