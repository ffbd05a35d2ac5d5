//! Extraction side: month sheets read from JSON, YAML or CSV files.
//!
//! The validation core only sees [`DaySource`]; where the days come from
//! (a file here, a scraped page elsewhere) is up to the implementation.

mod csv_sheet;
pub mod model;

pub use model::{DayKind, MonthSheet, SheetDay};

use crate::errors::{AppError, AppResult};
use crate::models::day::DayRecord;
use crate::models::worked::WorkedTimeEntry;
use clap::ValueEnum;
use std::path::Path;

/// What the validation core needs from an extraction collaborator.
pub trait DaySource {
    /// Working days (no weekends, no holidays) in supplied order.
    fn working_days(&self) -> Vec<DayRecord>;

    /// Logged time of the working days that carry a worked label.
    fn worked_entries(&self) -> AppResult<Vec<WorkedTimeEntry>>;

    fn working_day_count(&self) -> usize;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SheetFormat {
    Json,
    Yaml,
    Csv,
}

impl SheetFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetFormat::Json => "json",
            SheetFormat::Yaml => "yaml",
            SheetFormat::Csv => "csv",
        }
    }

    /// Guess the format from the file extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(SheetFormat::Json),
            "yaml" | "yml" => Ok(SheetFormat::Yaml),
            "csv" => Ok(SheetFormat::Csv),
            _ => Err(AppError::UnsupportedFormat(format!(
                "cannot guess the format of '{}' (use --format)",
                path.display()
            ))),
        }
    }
}

/// Load a month sheet, with an explicit format or one guessed from the path.
pub fn load_sheet(path: &Path, format: Option<SheetFormat>) -> AppResult<MonthSheet> {
    let format = match format {
        Some(f) => f,
        None => SheetFormat::from_path(path)?,
    };

    log::debug!("loading {} sheet from {}", format.as_str(), path.display());

    let content = std::fs::read_to_string(path)?;
    let sheet = match format {
        SheetFormat::Json => serde_json::from_str::<MonthSheet>(&content)?,
        SheetFormat::Yaml => serde_yaml::from_str::<MonthSheet>(&content)?,
        SheetFormat::Csv => csv_sheet::parse_csv(content.as_bytes())?,
    };

    sheet.check()?;
    Ok(sheet)
}
