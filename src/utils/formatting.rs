//! Formatting utilities used for CLI and export outputs.

use crate::utils::time::minutes_to_hours;
use unicode_width::UnicodeWidthStr;

/// Decimal hours, e.g. `450` minutes → `"7.50"` with two decimals.
pub fn fmt_hours(mins: i64, decimals: usize) -> String {
    format!("{:.*}", decimals, minutes_to_hours(mins))
}

/// Hours and minutes, e.g. `450` → `"07h 30m"`.
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}

/// Left-aligns `s` to a display width (accents and emoji count correctly).
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{s}", " ".repeat(fill))
}
