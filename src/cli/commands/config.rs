use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::{Path, PathBuf};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: Option<&Path>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path: PathBuf = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Config::config_file);

        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Configuration file: {}", path.display()));
            if !path.exists() {
                warning("File not found: showing defaults.");
            }
            println!("{}", ConfigLogic::render(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            cfg.check()?;
            success("Configuration is valid.");
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                Config::init_file(Some(&path), false)?;
            }
            let used = ConfigLogic::edit(&path, editor)?;
            success(format!("Configuration file edited using '{used}'"));
        }
    }

    Ok(())
}
