//! rShiftHours library root.
//! Exposes the shift classifier, the holiday calendar, the CLI parser and
//! the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub use crate::core::calculator::classify::classify_shift;
pub use crate::core::calendar::{HolidayCalendar, easter_sunday, get_holidays};
pub use crate::core::logic::Core;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let config_path: Option<PathBuf> = cli.config.as_deref().map(utils::path::expand_tilde);
    let config_path = config_path.as_deref();

    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Holidays { .. } => cli::commands::holidays::handle(&cli.command, cfg),
    }
}

/// stderr logging; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rshifthours={level}")));

    // a second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // 2️⃣ load config ONCE (init writes it instead)
    let cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        _ => {
            let path = cli.config.as_deref().map(utils::path::expand_tilde);
            Config::load(path.as_deref())?
        }
    };

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
