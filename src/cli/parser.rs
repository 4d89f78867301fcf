use crate::export::ExportFormat;
use crate::ingest::Delimiter;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rShiftHours
/// CLI application to split timesheet shifts into paid-hour categories
#[derive(Parser)]
#[command(
    name = "rshifthours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Split worked shifts into day, night, Sunday, holiday and supplemental hours",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate day window, holidays and delimiter")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Classify a timesheet and print the hours report
    Report {
        /// Timesheet table file, or "-" to read a pasted table from stdin
        input: String,

        #[arg(long, value_enum, help = "Column separator (default from config: tab)")]
        delimiter: Option<Delimiter>,

        #[arg(long = "details", help = "Show the partition, break and note tokens per shift")]
        details: bool,
    },

    /// Classify a timesheet and export the per-shift hours
    Export {
        /// Timesheet table file, or "-" to read from stdin
        input: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, help = "Column separator (default from config: tab)")]
        delimiter: Option<Delimiter>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// List the public holidays of a year
    Holidays {
        /// Year (YYYY)
        year: String,
    },
}
