//! Inspection and upgrade of an existing configuration file.
//!
//! Works on the raw `serde_yaml::Value` so unknown keys and user formatting of
//! the catalog are preserved.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry, with their defaults.
fn expected_keys() -> Vec<(&'static str, Value)> {
    vec![
        (
            "daily_required_hours",
            Value::from(super::default_daily_required_hours()),
        ),
        ("date_check", Value::from(super::default_date_check())),
        ("separator_char", Value::from(super::default_separator_char())),
    ]
}

const OPTIONAL_KEYS: &[&str] = &["catalog"];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConfigCheck {
    pub missing: Vec<String>,
    pub unknown: Vec<String>,
}

impl ConfigCheck {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty()
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Report missing and unknown top-level keys.
pub fn check_config_file(path: &Path) -> AppResult<ConfigCheck> {
    let map = read_mapping(path)?;
    let expected = expected_keys();

    let missing = expected
        .iter()
        .filter(|(k, _)| !map.contains_key(*k))
        .map(|(k, _)| k.to_string())
        .collect();

    let unknown = map
        .keys()
        .filter_map(|k| k.as_str())
        .filter(|k| !expected.iter().any(|(e, _)| e == k) && !OPTIONAL_KEYS.contains(k))
        .map(str::to_string)
        .collect();

    Ok(ConfigCheck { missing, unknown })
}

/// Add missing keys with their default values. Returns true if the file changed.
pub fn run_config_migration(path: &Path) -> AppResult<bool> {
    let mut map = read_mapping(path)?;
    let mut changed = false;

    for (key, default) in expected_keys() {
        if !map.contains_key(key) {
            info(format!("Adding missing key '{key}' with default {default:?}"));
            map.insert(Value::from(key), default);
            changed = true;
        }
    }

    if changed {
        let yaml = serde_yaml::to_string(&Value::Mapping(map))?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        success(format!("Configuration updated: {}", path.display()));
    }

    Ok(changed)
}
