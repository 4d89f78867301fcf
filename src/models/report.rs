use super::category::Category;
use super::hour_bucket::HourBucket;
use super::note::NoteTokens;
use super::shift_record::ShiftRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// One record after classification.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedShift {
    pub record: ShiftRecord,
    /// Buckets straight out of the interval partition (before break and notes).
    pub partition: HourBucket,
    /// Minutes actually removed from the day bucket for the unpaid break.
    pub break_deducted: i64,
    pub tokens: NoteTokens,
    pub bucket: HourBucket,
}

impl ClassifiedShift {
    pub fn elapsed_minutes(&self) -> i64 {
        self.partition.total()
    }
}

/// Why a row did not contribute to the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SkipReason {
    MissingDate,
    InvalidDate(String),
    MissingTime(String),
    InvalidTime(String),
    InvalidNumber(String),
    NegativeBreak(String),
    EmptyInterval,
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingDate => write!(f, "missing date"),
            SkipReason::InvalidDate(s) => write!(f, "invalid date '{s}'"),
            SkipReason::MissingTime(col) => write!(f, "missing {col} time"),
            SkipReason::InvalidTime(s) => write!(f, "invalid time '{s}'"),
            SkipReason::InvalidNumber(s) => write!(f, "invalid number '{s}'"),
            SkipReason::NegativeBreak(s) => write!(f, "negative break '{s}'"),
            SkipReason::EmptyInterval => write!(f, "start and end are equal"),
            SkipReason::Unreadable(e) => write!(f, "unreadable row: {e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub row: usize,
    pub reason: SkipReason,
}

/// Totals over all valid shifts.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub totals: HourBucket,
    pub worked_dates: BTreeSet<NaiveDate>,
    pub shifts: usize,
    pub declared_minutes: i64,
}

impl Summary {
    pub fn days_worked(&self) -> usize {
        self.worked_dates.len()
    }

    pub fn hours(&self, cat: Category) -> f64 {
        self.totals.hours(cat)
    }

    /// Sum of the five categories.
    pub fn computed_minutes(&self) -> i64 {
        self.totals.total()
    }

    /// Folds another partial summary into this one. Order does not matter.
    pub fn merge(mut self, other: Summary) -> Summary {
        self.totals.merge(&other.totals);
        self.worked_dates.extend(other.worked_dates);
        self.shifts += other.shifts;
        self.declared_minutes = self.declared_minutes.saturating_add(other.declared_minutes);
        self
    }
}

/// Everything produced by one run over a timesheet.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Report {
    pub shifts: Vec<ClassifiedShift>,
    pub skipped: Vec<SkippedRow>,
    pub summary: Summary,
}

impl Report {
    /// Shifts carrying a non-empty supervisor note.
    pub fn annotated(&self) -> impl Iterator<Item = &ClassifiedShift> {
        self.shifts.iter().filter(|s| !s.record.notes.is_empty())
    }
}
