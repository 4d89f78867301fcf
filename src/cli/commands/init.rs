use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Writes the default configuration (day window, holiday list, input
/// delimiter) to the standard location or to `--config`.
pub fn handle(cmd: &Commands, config_path: Option<&Path>) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        let existed = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Config::config_file)
            .exists();

        let path = Config::init_file(config_path, *force)?;

        if existed && !*force {
            info(format!(
                "Config file already present: {} (use --force to reset)",
                path.display()
            ));
        } else {
            success(format!("Config file: {}", path.display()));
        }
    }
    Ok(())
}
