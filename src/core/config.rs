use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Effective configuration as YAML (defaults filled in).
    pub fn render(cfg: &Config) -> AppResult<String> {
        Ok(serde_yaml::to_string(cfg)?)
    }

    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Opens `path` in `editor`, falling back to the platform default when
    /// the requested editor is missing or fails. Returns the editor used.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let default_editor = Self::default_editor();
        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => return Ok(requested),
            _ => tracing::warn!(editor = %requested, fallback = %default_editor, "editor failed"),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => Ok(default_editor),
            Ok(s) => Err(AppError::Config(format!("editor '{default_editor}' exited with {s}"))),
            Err(e) => Err(AppError::Config(format!("cannot run '{default_editor}': {e}"))),
        }
    }
}
