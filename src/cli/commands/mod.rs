pub mod config;
pub mod export;
pub mod holidays;
pub mod init;
pub mod report;

use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ingest::{Delimiter, read_table, read_table_file};
use crate::models::Report;
use crate::utils::path::expand_tilde;
use std::io;

/// Reads `input` ("-" for stdin) and classifies it with the configured
/// calendar and day window.
pub(crate) fn classify_input(
    input: &str,
    delimiter: Option<Delimiter>,
    cfg: &Config,
) -> AppResult<Report> {
    let delimiter = match delimiter {
        Some(d) => d,
        None => cfg.input_delimiter()?,
    };
    let calendar = cfg.calendar()?;
    let window = cfg.day_window()?;

    let rows = if input == "-" {
        read_table(io::stdin().lock(), delimiter)?
    } else {
        read_table_file(&expand_tilde(input), delimiter)?
    };

    Ok(Core::process(rows, &calendar, &window))
}
