#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rshifthours::models::ShiftRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsh() -> Command {
    cargo_bin_cmd!("rshifthours")
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

/// Shift on `date` from `start` to `end` given as (hour, minute).
pub fn shift(date: NaiveDate, start: (u32, u32), end: (u32, u32)) -> ShiftRecord {
    ShiftRecord::new(date, t(start.0, start.1), t(end.0, end.1))
}

/// Create a temporary file path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rshifthours_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp file and return its path
pub fn write_input(name: &str, content: &str) -> String {
    let p = temp_path(name, "tsv");
    fs::write(&p, content).expect("write input table");
    p
}

/// A config path that does not exist, so the defaults are used
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_missing_conf"), "conf")
}

/// Timesheet as pasted from the spreadsheet (French headers, tab separated)
pub const SAMPLE_TABLE: &str = "Date\tDébut\tFin\tPause non payée\tTotal (h)\tNotes du superviseur
04/03/2025\t08:00\t16:00\t0,5\t7,5\t
04/03/2025\t18:00\t20:00\t0\t2\tRenfort
09/03/2025\t22:00\t06:00\t0\t8\t+1h
bad\t08:00\t10:00\t0\t2\t
";
