//! Unified application error type.
//! All modules (ingest, core, cli, export) return AppError for batch-level
//! failures. Problems confined to a single timesheet row are not errors:
//! they become a `SkippedRow` and the batch goes on.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input table
    // ---------------------------
    #[error("Table read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required columns: {0}")]
    MissingColumns(String),

    #[error("The input table contains no rows")]
    EmptyTable,

    #[error("Unsupported delimiter: {0}")]
    InvalidDelimiter(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid year: {0}")]
    InvalidYear(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Export cancelled: existing file not overwritten")]
    ExportCancelled,
}

pub type AppResult<T> = Result<T, AppError>;
