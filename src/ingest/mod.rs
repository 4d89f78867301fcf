//! Reading a timesheet table into shift records.

pub mod table;

pub use table::{read_table, read_table_file, read_table_str};

use crate::errors::AppError;
use clap::ValueEnum;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Delimiter {
    Tab,
    Comma,
    Semicolon,
}

impl Delimiter {
    pub fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
        }
    }
}

impl FromStr for Delimiter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "\t" {
            return Ok(Delimiter::Tab);
        }
        match s.trim().to_lowercase().as_str() {
            "tab" | "\\t" => Ok(Delimiter::Tab),
            "comma" | "," => Ok(Delimiter::Comma),
            "semicolon" | ";" => Ok(Delimiter::Semicolon),
            other => Err(AppError::InvalidDelimiter(other.to_string())),
        }
    }
}
