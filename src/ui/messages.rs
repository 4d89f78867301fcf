use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tagged(colour: Colour, icon: &str) -> String {
    Style::new().bold().fg(colour).paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", tagged(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", tagged(Colour::Green, ICON_OK), msg);
}

/// Warnings go to stderr so that piped report output stays clean.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tagged(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tagged(Colour::Red, ICON_ERR), msg);
}

/// Section title of the console report.
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "\n{}",
        Style::new()
            .bold()
            .fg(Colour::Blue)
            .paint(format!("=== {msg} ==="))
    );
}
