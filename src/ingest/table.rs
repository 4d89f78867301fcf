use super::Delimiter;
use crate::errors::{AppError, AppResult};
use crate::models::{ShiftRecord, SkipReason, SkippedRow};
use crate::utils::date::parse_date;
use crate::utils::time::{parse_decimal, parse_time};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Accepted header names, compared lowercase after trimming.
const DATE_HEADERS: &[&str] = &["date"];
const START_HEADERS: &[&str] = &["start", "début", "debut"];
const END_HEADERS: &[&str] = &["end", "fin"];
const BREAK_HEADERS: &[&str] = &[
    "break",
    "unpaid break",
    "pause",
    "pause non payée",
    "pause non payé",
    "pause non payee",
];
const TOTAL_HEADERS: &[&str] = &["total", "total (h)"];
const NOTES_HEADERS: &[&str] = &[
    "notes",
    "notes du superviseur",
    "notes de superviseur",
    "supervisor notes",
];

/// Largest unpaid break a single shift can declare.
const MAX_BREAK_HOURS: f64 = 24.0;
/// Bound on the declared total, keeps minute sums far from `i64` limits.
const MAX_TOTAL_HOURS: f64 = 1e6;

pub type RowResult = Result<ShiftRecord, SkippedRow>;

#[derive(Debug)]
struct Columns {
    date: usize,
    start: usize,
    end: usize,
    brk: usize,
    total: usize,
    notes: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> AppResult<Self> {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let find = |aliases: &[&str]| {
            names
                .iter()
                .position(|n| aliases.iter().any(|a| *a == n.as_str()))
        };

        let mut missing = Vec::new();
        let mut need = |aliases: &[&str], label: &'static str| {
            let found = find(aliases);
            if found.is_none() {
                missing.push(label);
            }
            found.unwrap_or(0)
        };

        let cols = Columns {
            date: need(DATE_HEADERS, "date"),
            start: need(START_HEADERS, "start"),
            end: need(END_HEADERS, "end"),
            brk: need(BREAK_HEADERS, "break"),
            total: need(TOTAL_HEADERS, "total"),
            notes: find(NOTES_HEADERS),
        };

        if !missing.is_empty() {
            return Err(AppError::MissingColumns(missing.join(", ")));
        }
        Ok(cols)
    }
}

/// Reads a delimited timesheet with a header row.
///
/// A table without the required columns fails as a whole; a bad row only
/// becomes a [`SkippedRow`]. Fully blank rows are ignored.
pub fn read_table<R: Read>(reader: R, delimiter: Delimiter) -> AppResult<Vec<RowResult>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let cols = Columns::resolve(&headers)?;

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let row = idx + 1;
        match result {
            Ok(rec) => {
                if rec.iter().all(|f| f.trim().is_empty()) {
                    continue;
                }
                rows.push(parse_row(&rec, &cols, row));
            }
            Err(e) => rows.push(Err(SkippedRow {
                row,
                reason: SkipReason::Unreadable(e.to_string()),
            })),
        }
    }

    if rows.is_empty() {
        return Err(AppError::EmptyTable);
    }

    tracing::debug!(rows = rows.len(), "timesheet table read");
    Ok(rows)
}

pub fn read_table_file(path: &Path, delimiter: Delimiter) -> AppResult<Vec<RowResult>> {
    let file = File::open(path)?;
    read_table(file, delimiter)
}

pub fn read_table_str(input: &str, delimiter: Delimiter) -> AppResult<Vec<RowResult>> {
    read_table(input.as_bytes(), delimiter)
}

fn parse_row(rec: &StringRecord, cols: &Columns, row: usize) -> RowResult {
    parse_fields(rec, cols)
        .map(|r| r.with_row(row))
        .map_err(|reason| SkippedRow { row, reason })
}

fn parse_fields(rec: &StringRecord, cols: &Columns) -> Result<ShiftRecord, SkipReason> {
    let field = move |i: usize| rec.get(i).unwrap_or("").trim();

    let raw_date = field(cols.date);
    if raw_date.is_empty() {
        return Err(SkipReason::MissingDate);
    }
    let date = parse_date(raw_date).ok_or_else(|| SkipReason::InvalidDate(raw_date.to_string()))?;

    let time = |i: usize, label: &str| {
        let raw = field(i);
        if raw.is_empty() {
            return Err(SkipReason::MissingTime(label.to_string()));
        }
        parse_time(raw).ok_or_else(|| SkipReason::InvalidTime(raw.to_string()))
    };
    let start = time(cols.start, "start")?;
    let end = time(cols.end, "end")?;

    let hours = |i: usize| match parse_decimal(field(i)) {
        None => Ok(0.0),
        Some(v) => v.map_err(SkipReason::InvalidNumber),
    };
    let brk = hours(cols.brk)?;
    if brk < 0.0 {
        return Err(SkipReason::NegativeBreak(field(cols.brk).to_string()));
    }
    if brk > MAX_BREAK_HOURS {
        return Err(SkipReason::InvalidNumber(field(cols.brk).to_string()));
    }
    let total = hours(cols.total)?;
    if total.abs() > MAX_TOTAL_HOURS {
        return Err(SkipReason::InvalidNumber(field(cols.total).to_string()));
    }

    let notes = cols.notes.map(field).unwrap_or("");

    Ok(ShiftRecord::new(date, start, end)
        .with_break_hours(brk)
        .with_declared_hours(total)
        .with_notes(notes))
}
