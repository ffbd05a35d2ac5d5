use crate::core::calculator::check_daily_required_hours;
use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_daily_required_hours")]
    pub daily_required_hours: i64,
    #[serde(default = "default_date_check")]
    pub date_check: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Replaces the built-in event catalog when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<BTreeMap<String, EventKind>>,

    /// Where this configuration was read from; never serialized.
    #[serde(skip)]
    pub path: PathBuf,
}

pub(crate) fn default_daily_required_hours() -> i64 {
    crate::core::calculator::DEFAULT_DAILY_REQUIRED_HOURS
}
pub(crate) fn default_date_check() -> bool {
    true
}
pub(crate) fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daily_required_hours: default_daily_required_hours(),
            date_check: default_date_check(),
            separator_char: default_separator_char(),
            catalog: None,
            path: Self::config_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Resolve `--config` (with `~/` expansion) or fall back to the standard path.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom.map(expand_tilde).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(custom: Option<&str>) -> AppResult<Self> {
        let path = Self::resolve_path(custom);
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no configuration at {}, using defaults", path.display());
            return Ok(Config {
                path: path.to_path_buf(),
                ..Config::default()
            });
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        check_daily_required_hours(cfg.daily_required_hours)
            .map_err(|e| AppError::Config(format!("daily_required_hours: {e}")))?;

        cfg.path = path.to_path_buf();
        log::debug!("configuration loaded from {}", path.display());
        Ok(cfg)
    }

    /// Write the configuration (with the full default catalog spelled out, so
    /// it can be edited by hand).
    pub fn init_at(path: &Path, overwrite: bool) -> AppResult<Config> {
        if path.exists() && !overwrite {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let config = Config {
            catalog: Some(crate::core::catalog::EventCatalog::default().to_map()),
            path: path.to_path_buf(),
            ..Config::default()
        };

        config.save()?;
        Ok(config)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(&self.path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }
}
