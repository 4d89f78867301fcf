use crate::core::calculator::window::DayWindow;
use crate::core::calendar::{FixedHoliday, HolidayCalendar, default_fixed_holidays};
use crate::errors::{AppError, AppResult};
use crate::ingest::Delimiter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_day_start")]
    pub day_start: String,
    #[serde(default = "default_day_end")]
    pub day_end: String,
    /// Column separator of the input table: tab, comma or semicolon.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_fixed_holidays")]
    pub fixed_holidays: Vec<FixedHoliday>,
    /// One-off holidays as `YYYY-MM-DD`.
    #[serde(default)]
    pub extra_holidays: Vec<String>,
    /// Decimal places when printing hours.
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

fn default_day_start() -> String {
    "06:00".to_string()
}
fn default_day_end() -> String {
    "21:00".to_string()
}
fn default_delimiter() -> String {
    "tab".to_string()
}
fn default_decimals() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            day_start: default_day_start(),
            day_end: default_day_end(),
            delimiter: default_delimiter(),
            fixed_holidays: default_fixed_holidays(),
            extra_holidays: Vec::new(),
            decimals: default_decimals(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rshifthours")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rshifthours.conf")
    }

    /// Load configuration from `path` (or the standard location), or
    /// return defaults if the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Write a default configuration file unless one already exists.
    /// Returns the path written (or found).
    pub fn init_file(path: Option<&Path>, force: bool) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if path.exists() && !force {
            return Ok(path);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }

    pub fn day_window(&self) -> AppResult<DayWindow> {
        DayWindow::parse(&self.day_start, &self.day_end)
    }

    pub fn calendar(&self) -> AppResult<HolidayCalendar> {
        HolidayCalendar::new(&self.fixed_holidays, &self.extra_holidays)
    }

    pub fn input_delimiter(&self) -> AppResult<Delimiter> {
        self.delimiter.parse()
    }

    /// Validates every field that is parsed lazily.
    pub fn check(&self) -> AppResult<()> {
        self.day_window()?;
        self.calendar()?;
        self.input_delimiter()?;
        Ok(())
    }
}
