use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// The hour group must not be the tail of a longer number ("1234:30").
static WORKED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\D)(\d{1,3}):(\d{1,2})\s*$").expect("valid worked-time regex")
});

/// Time logged for one working day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkedTimeEntry {
    pub hours: i64,
    pub minutes: i64,
}

impl WorkedTimeEntry {
    pub fn new(hours: i64, minutes: i64) -> Self {
        Self { hours, minutes }
    }

    /// Parse free text such as `worked: 07:30`, `Odpracováno 7:30` or `7:30`.
    /// The last `H:MM` group of the label wins.
    pub fn parse(label: &str) -> AppResult<Self> {
        let caps = WORKED_RE
            .captures(label.trim())
            .ok_or_else(|| AppError::InvalidWorkedTime(label.to_string()))?;

        let hours: i64 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidWorkedTime(label.to_string()))?;
        let minutes: i64 = caps[2]
            .parse()
            .map_err(|_| AppError::InvalidWorkedTime(label.to_string()))?;

        if minutes >= 60 {
            return Err(AppError::InvalidWorkedTime(label.to_string()));
        }

        Ok(Self { hours, minutes })
    }

    /// Zero entries mean "no time logged yet".
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0
    }

    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }
}
