use serde::Serialize;

/// Month accounting without the per-day quota. Always computable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthTotals {
    pub required_minutes_total: i64,
    pub worked_minutes_total: i64,
    /// Negative when overtime is already logged.
    pub remaining_minutes: i64,
    pub logged_days: i64,
    pub days_without_entry: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthSummary {
    pub required_minutes_total: i64,
    pub worked_minutes_total: i64,
    pub remaining_minutes: i64,
    pub logged_days: i64,
    pub days_without_entry: i64,
    pub required_minutes_per_remaining_day: f64,
}

impl MonthSummary {
    pub fn totals(&self) -> MonthTotals {
        MonthTotals {
            required_minutes_total: self.required_minutes_total,
            worked_minutes_total: self.worked_minutes_total,
            remaining_minutes: self.remaining_minutes,
            logged_days: self.logged_days,
            days_without_entry: self.days_without_entry,
        }
    }

    /// Quota truncated to whole minutes.
    pub fn quota_minutes(&self) -> i64 {
        self.required_minutes_per_remaining_day.trunc() as i64
    }
}

/// Result of the month accounting as carried by the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MonthOutcome {
    Quota(MonthSummary),
    /// Every working day already has logged time.
    NoRemainingDays(MonthTotals),
    /// Worked labels or required hours could not be used; the day checks
    /// are unaffected.
    Unavailable { error: String },
}

impl MonthOutcome {
    pub fn unavailable(err: impl std::fmt::Display) -> Self {
        log::info!("month accounting unavailable: {err}");
        MonthOutcome::Unavailable {
            error: err.to_string(),
        }
    }

    pub fn totals(&self) -> Option<MonthTotals> {
        match self {
            MonthOutcome::Quota(s) => Some(s.totals()),
            MonthOutcome::NoRemainingDays(t) => Some(*t),
            MonthOutcome::Unavailable { .. } => None,
        }
    }

    pub fn summary(&self) -> Option<&MonthSummary> {
        match self {
            MonthOutcome::Quota(s) => Some(s),
            _ => None,
        }
    }
}
