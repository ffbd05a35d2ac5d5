//! Unified application error type.
//! All modules (core, extract, export, ui, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected dd.mm.yy)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid worked time: {0}")]
    InvalidWorkedTime(String),

    #[error("Unsupported sheet format: {0}")]
    UnsupportedFormat(String),

    // ---------------------------
    // Validation / accounting
    // ---------------------------
    #[error("Unknown event kind: {0}")]
    UnknownEventKind(String),

    #[error("Every working day already has logged time: no daily quota applicable")]
    NoRemainingDays,

    #[error("Required hours per day must be between 1 and {max}, got {0}", max = crate::core::calculator::MAX_DAILY_REQUIRED_HOURS)]
    InvalidRequiredHours(i64),

    #[error("{0} day(s) with attendance issues")]
    IssuesFound(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("Export cancelled: '{0}' already exists and was not overwritten")]
    ExportRefused(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
