// src/export/model.rs

use crate::models::{Category, ClassifiedShift, Report, SkippedRow};
use crate::utils::date::weekday_short;
use crate::utils::time::minutes_to_hours;
use serde::Serialize;

fn round2(h: f64) -> f64 {
    (h * 100.0).round() / 100.0
}

/// Flat per-shift row for CSV / JSON / XLSX.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ShiftExport {
    pub row: usize,
    pub date: String,
    pub weekday: String,
    pub start: String,
    pub end: String,
    pub unpaid_break: f64,
    pub declared_total: f64,
    pub day: f64,
    pub night: f64,
    pub sunday: f64,
    pub holiday: f64,
    pub supplemental: f64,
    pub notes: String,
}

impl From<&ClassifiedShift> for ShiftExport {
    fn from(s: &ClassifiedShift) -> Self {
        let h = |c: Category| round2(s.bucket.hours(c));
        Self {
            row: s.record.row,
            date: s.record.date_str(),
            weekday: weekday_short(s.record.date).to_string(),
            start: s.record.start_str(),
            end: s.record.end_str(),
            unpaid_break: round2(minutes_to_hours(s.record.unpaid_break_minutes)),
            declared_total: round2(minutes_to_hours(s.record.declared_minutes)),
            day: h(Category::Day),
            night: h(Category::Night),
            sunday: h(Category::Sunday),
            holiday: h(Category::Holiday),
            supplemental: h(Category::Supplemental),
            notes: s.record.notes.clone(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryExport {
    pub days_worked: usize,
    pub shifts: usize,
    pub skipped_rows: usize,
    pub day: f64,
    pub night: f64,
    pub sunday: f64,
    pub holiday: f64,
    pub supplemental: f64,
    pub computed_total: f64,
    pub declared_total: f64,
}

impl From<&Report> for SummaryExport {
    fn from(r: &Report) -> Self {
        let s = &r.summary;
        let h = |c: Category| round2(s.hours(c));
        Self {
            days_worked: s.days_worked(),
            shifts: s.shifts,
            skipped_rows: r.skipped.len(),
            day: h(Category::Day),
            night: h(Category::Night),
            sunday: h(Category::Sunday),
            holiday: h(Category::Holiday),
            supplemental: h(Category::Supplemental),
            computed_total: round2(minutes_to_hours(s.computed_minutes())),
            declared_total: round2(minutes_to_hours(s.declared_minutes)),
        }
    }
}

/// Whole report as written by the JSON export.
#[derive(Serialize, Debug)]
pub struct ReportExport<'a> {
    pub summary: SummaryExport,
    pub shifts: Vec<ShiftExport>,
    pub skipped: &'a [SkippedRow],
}

impl<'a> From<&'a Report> for ReportExport<'a> {
    fn from(r: &'a Report) -> Self {
        Self {
            summary: SummaryExport::from(r),
            shifts: r.shifts.iter().map(ShiftExport::from).collect(),
            skipped: &r.skipped,
        }
    }
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "row",
        "date",
        "weekday",
        "start",
        "end",
        "unpaid_break",
        "declared_total",
        "day",
        "night",
        "sunday",
        "holiday",
        "supplemental",
        "notes",
    ]
}

/// Typed cell, so XLSX can write numbers as numbers.
pub(crate) enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

pub(crate) fn shift_to_cells(s: &ShiftExport) -> Vec<Cell<'_>> {
    vec![
        Cell::Number(s.row as f64),
        Cell::Text(&s.date),
        Cell::Text(&s.weekday),
        Cell::Text(&s.start),
        Cell::Text(&s.end),
        Cell::Number(s.unpaid_break),
        Cell::Number(s.declared_total),
        Cell::Number(s.day),
        Cell::Number(s.night),
        Cell::Number(s.sunday),
        Cell::Number(s.holiday),
        Cell::Number(s.supplemental),
        Cell::Text(&s.notes),
    ]
}
