//! Public holiday calendar: fixed-date holidays plus the feasts that move
//! with Easter.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// A holiday falling on the same month/day every year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedHoliday {
    /// `MM-DD`
    pub date: String,
    pub name: String,
}

impl FixedHoliday {
    pub fn new(date: &str, name: &str) -> Self {
        Self {
            date: date.to_string(),
            name: name.to_string(),
        }
    }

    fn month_day(&self) -> AppResult<(u32, u32)> {
        let bad = || AppError::Config(format!("invalid fixed holiday date '{}'", self.date));
        let (m, d) = self.date.trim().split_once('-').ok_or_else(bad)?;
        let month: u32 = m.parse().map_err(|_| bad())?;
        let day: u32 = d.parse().map_err(|_| bad())?;
        // 2024 is a leap year, so 02-29 is accepted here
        NaiveDate::from_ymd_opt(2024, month, day).ok_or_else(bad)?;
        Ok((month, day))
    }
}

/// Feasts defined as an offset from Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovableFeast {
    EasterMonday,
    Ascension,
    WhitMonday,
}

impl MovableFeast {
    pub const ALL: [MovableFeast; 3] = [
        MovableFeast::EasterMonday,
        MovableFeast::Ascension,
        MovableFeast::WhitMonday,
    ];

    pub fn days_after_easter(&self) -> i64 {
        match self {
            MovableFeast::EasterMonday => 1,
            MovableFeast::Ascension => 39,
            MovableFeast::WhitMonday => 50,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MovableFeast::EasterMonday => "Lundi de Pâques",
            MovableFeast::Ascension => "Ascension",
            MovableFeast::WhitMonday => "Lundi de Pentecôte",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

const DEFAULT_FIXED: [(u32, u32, &str); 9] = [
    (1, 1, "Jour de l'an"),
    (5, 1, "Fête du Travail"),
    (5, 8, "Victoire 1945"),
    (7, 14, "Fête nationale"),
    (8, 15, "Assomption"),
    (11, 1, "Toussaint"),
    (11, 11, "Armistice 1918"),
    (12, 25, "Noël"),
    (12, 26, "Saint-Étienne"),
];

/// The nine fixed-date holidays used when the configuration does not
/// provide its own list.
pub fn default_fixed_holidays() -> Vec<FixedHoliday> {
    DEFAULT_FIXED
        .iter()
        .map(|(m, d, name)| FixedHoliday::new(&format!("{m:02}-{d:02}"), name))
        .collect()
}

/// Easter Sunday for a Gregorian year (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let y = year;
    let a = y.rem_euclid(19);
    let b = y.div_euclid(100);
    let c = y.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let month = (h + l - 7 * m + 114).div_euclid(31);
    let day = (h + l - 7 * m + 114).rem_euclid(31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Holiday dates of `year` under the default calendar.
pub fn get_holidays(year: i32) -> BTreeSet<NaiveDate> {
    HolidayCalendar::default()
        .holidays(year)
        .into_iter()
        .map(|h| h.date)
        .collect()
}

#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    fixed: Vec<(u32, u32, String)>,
    extra: BTreeMap<NaiveDate, String>,
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self {
            fixed: DEFAULT_FIXED
                .iter()
                .map(|(m, d, name)| (*m, *d, name.to_string()))
                .collect(),
            extra: BTreeMap::new(),
        }
    }
}

impl HolidayCalendar {
    /// `extra` holds one-off dates as `YYYY-MM-DD`.
    pub fn new(fixed: &[FixedHoliday], extra: &[String]) -> AppResult<Self> {
        let mut parsed = Vec::with_capacity(fixed.len());
        for f in fixed {
            let (month, day) = f.month_day()?;
            parsed.push((month, day, f.name.clone()));
        }

        let mut extra_dates = BTreeMap::new();
        for raw in extra {
            let d = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|_| AppError::Config(format!("invalid extra holiday '{raw}'")))?;
            extra_dates.insert(d, "Jour férié".to_string());
        }

        Ok(Self {
            fixed: parsed,
            extra: extra_dates,
        })
    }

    /// All holidays of `year`, sorted by date.
    pub fn holidays(&self, year: i32) -> Vec<Holiday> {
        let mut out: BTreeMap<NaiveDate, String> = BTreeMap::new();

        for (month, day, name) in &self.fixed {
            // 02-29 simply does not occur in common years
            if let Some(date) = NaiveDate::from_ymd_opt(year, *month, *day) {
                out.entry(date).or_insert_with(|| name.clone());
            }
        }

        if let Some(easter) = easter_sunday(year) {
            for feast in MovableFeast::ALL {
                if let Some(date) =
                    easter.checked_add_signed(Duration::days(feast.days_after_easter()))
                {
                    out.entry(date).or_insert_with(|| feast.name().to_string());
                }
            }
        }

        for (date, name) in self.extra.iter().filter(|(d, _)| d.year() == year) {
            out.entry(*date).or_insert_with(|| name.clone());
        }

        out.into_iter()
            .map(|(date, name)| Holiday { date, name })
            .collect()
    }

    /// Union of the holiday dates of every year in `years`; each distinct
    /// year is computed once.
    pub fn dates_for_years<I: IntoIterator<Item = i32>>(&self, years: I) -> HashSet<NaiveDate> {
        let distinct: BTreeSet<i32> = years.into_iter().collect();
        distinct
            .into_iter()
            .flat_map(|y| self.holidays(y).into_iter().map(|h| h.date))
            .collect()
    }
}
