use crate::cli::commands::classify_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        delimiter,
        force,
    } = cmd
    {
        let report = classify_input(input, *delimiter, cfg)?;
        ExportLogic::export(&report, *format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
