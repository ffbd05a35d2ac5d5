use serde::Serialize;
use std::fmt;

/// Stable codes of the findings produced by the day validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidFirstEntry,
    InvalidLastEntry,
    BrokenContinuity,
    DateMismatch,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::InvalidFirstEntry => "invalid_first_entry",
            IssueCode::InvalidLastEntry => "invalid_last_entry",
            IssueCode::BrokenContinuity => "broken_continuity",
            IssueCode::DateMismatch => "date_mismatch",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: IssueCode,
    pub message: String,
    /// Index of the offending punch within the day.
    pub event_index: Option<usize>,
}

impl ValidationIssue {
    pub fn new(code: IssueCode, message: String, event_index: usize) -> Self {
        Self {
            code,
            message,
            event_index: Some(event_index),
        }
    }
}
