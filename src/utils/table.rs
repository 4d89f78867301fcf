//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
    /// Longer cells are wrapped onto several lines.
    pub max_width: Option<usize>,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
            max_width: None,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
            max_width: None,
        }
    }

    pub fn wrapped(mut self, width: usize) -> Self {
        self.max_width = Some(width.max(1));
        self
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn cell_lines(&self, col: usize, value: &str) -> Vec<String> {
        match self.columns[col].max_width {
            Some(w) if UnicodeWidthStr::width(value) > w => textwrap::wrap(value, w)
                .into_iter()
                .map(|l| l.into_owned())
                .collect(),
            _ => vec![value.to_string()],
        }
    }

    pub fn render(&self) -> String {
        // wrap first, then measure
        let wrapped: Vec<Vec<Vec<String>>> = self
            .rows
            .iter()
            .map(|row| {
                (0..self.columns.len())
                    .map(|c| self.cell_lines(c, row.get(c).map(String::as_str).unwrap_or("")))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(c, col)| {
                wrapped
                    .iter()
                    .flat_map(|row| row[c].iter())
                    .map(|l| UnicodeWidthStr::width(l.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| align(&col.header, *w, col.align))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("  "));
        out.push('\n');

        // Rows
        for row in &wrapped {
            let height = row.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                let cells: Vec<String> = self
                    .columns
                    .iter()
                    .enumerate()
                    .map(|(c, col)| {
                        let v = row[c].get(line).map(String::as_str).unwrap_or("");
                        align(v, widths[c], col.align)
                    })
                    .collect();
                out.push_str(cells.join("  ").trim_end());
                out.push('\n');
            }
        }

        out
    }
}

fn align(s: &str, width: usize, how: Align) -> String {
    match how {
        Align::Left => pad_right(s, width),
        Align::Right => pad_left(s, width),
    }
}
