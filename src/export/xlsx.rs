// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{Cell, ShiftExport, SummaryExport, get_headers, shift_to_cells};
use crate::export::notify_export_success;
use crate::models::Report;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX: a "Shifts" sheet with banded rows and a "Summary" sheet.
pub(crate) fn export_xlsx(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    // ---------------------------
    // Shifts
    // ---------------------------
    let rows: Vec<ShiftExport> = report.shifts.iter().map(ShiftExport::from).collect();
    let headers = get_headers();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Shifts").map_err(to_app_error)?;

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }
    sheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, shift) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in shift_to_cells(shift).iter().enumerate() {
            let width = write_cell(sheet, row, col as u16, cell, band_color)?;
            col_widths[col] = col_widths[col].max(width);
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        sheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    // ---------------------------
    // Summary
    // ---------------------------
    let summary = SummaryExport::from(report);
    let lines: [(&str, f64); 10] = [
        ("Days worked", summary.days_worked as f64),
        ("Shifts", summary.shifts as f64),
        ("Skipped rows", summary.skipped_rows as f64),
        ("Day hours", summary.day),
        ("Night hours", summary.night),
        ("Sunday hours", summary.sunday),
        ("Holiday hours", summary.holiday),
        ("Supplemental hours", summary.supplemental),
        ("Computed total", summary.computed_total),
        ("Declared total", summary.declared_total),
    ];

    let sheet = workbook.add_worksheet();
    sheet.set_name("Summary").map_err(to_app_error)?;
    sheet
        .write_with_format(0, 0, "Item", &header_format)
        .map_err(to_app_error)?;
    sheet
        .write_with_format(0, 1, "Value", &header_format)
        .map_err(to_app_error)?;

    for (i, (label, value)) in lines.iter().enumerate() {
        let row = (i + 1) as u32;
        write_cell(sheet, row, 0, &Cell::Text(label), band2)?;
        write_cell(sheet, row, 1, &Cell::Number(*value), band2)?;
    }
    sheet.set_column_width(0, 22.0).map_err(to_app_error)?;
    sheet.set_column_width(1, 12.0).map_err(to_app_error)?;

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Writes one cell and returns its display width.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell<'_>,
    bg: Color,
) -> AppResult<usize> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Number(n) => {
            let fmt = base.set_align(FormatAlign::Right).set_num_format("0.00");
            worksheet
                .write_with_format(row, col, *n, &fmt)
                .map_err(to_app_error)?;
            Ok(format!("{n:.2}").len())
        }
        Cell::Text(s) => {
            worksheet
                .write_with_format(row, col, *s, &base)
                .map_err(to_app_error)?;
            Ok(UnicodeWidthStr::width(*s))
        }
    }
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
