use crate::core::calculator::{aggregate, classify, window::DayWindow};
use crate::core::calendar::HolidayCalendar;
use crate::models::{Report, ShiftRecord, SkippedRow};
use chrono::Datelike;

pub struct Core;

impl Core {
    /// Classifies every readable row and builds the run report.
    ///
    /// Rows that already failed ingestion arrive as `Err` and are carried
    /// into `Report::skipped` together with the rows the classifier rejects.
    pub fn process(
        rows: Vec<Result<ShiftRecord, SkippedRow>>,
        calendar: &HolidayCalendar,
        window: &DayWindow,
    ) -> Report {
        let mut records = Vec::new();
        let mut skipped = Vec::new();
        for row in rows {
            match row {
                Ok(record) => records.push(record),
                Err(skip) => {
                    tracing::warn!(row = skip.row, reason = %skip.reason, "row skipped");
                    skipped.push(skip);
                }
            }
        }

        // a shift crossing midnight on 31 December also touches the next year
        let years = records.iter().flat_map(|r| {
            let y = r.date.year();
            [y, y.saturating_add(1)]
        });
        let holidays = calendar.dates_for_years(years);

        let mut shifts = Vec::with_capacity(records.len());
        for record in &records {
            match classify::classify_shift(record, &holidays, window) {
                Ok(shift) => shifts.push(shift),
                Err(reason) => {
                    tracing::warn!(row = record.row, %reason, "row skipped");
                    skipped.push(SkippedRow {
                        row: record.row,
                        reason,
                    });
                }
            }
        }
        skipped.sort_by_key(|s| s.row);

        let summary = aggregate::aggregate(&shifts);

        Report {
            shifts,
            skipped,
            summary,
        }
    }
}
