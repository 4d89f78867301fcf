// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::Report;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes the classified report to `path` in the requested format.
    ///
    /// An existing file is only replaced with `force` or after confirmation.
    pub fn export(report: &Report, format: ExportFormat, path: &Path, force: bool) -> AppResult<()> {
        ensure_writable(path, force)?;

        if report.shifts.is_empty() {
            warning("No valid shifts in the input: exporting an empty report.");
        }

        tracing::debug!(format = format.as_str(), path = %path.display(), "exporting report");

        match format {
            ExportFormat::Csv => export_csv(report, path)?,
            ExportFormat::Json => export_json(report, path)?,
            ExportFormat::Xlsx => export_xlsx(report, path)?,
        }

        Ok(())
    }
}
