// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{ReportExport, ShiftExport, get_headers};
use crate::export::notify_export_success;
use crate::models::Report;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed: summary, per-shift rows and skipped rows.
pub(crate) fn export_json(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&ReportExport::from(report))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, one line per classified shift.
pub(crate) fn export_csv(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    // serde only writes the header together with the first record
    if report.shifts.is_empty() {
        wtr.write_record(get_headers())?;
    }

    for shift in &report.shifts {
        wtr.serialize(ShiftExport::from(shift))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
