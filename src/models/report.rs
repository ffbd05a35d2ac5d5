use super::issue::ValidationIssue;
use super::summary::MonthOutcome;
use serde::Serialize;

/// Classification of one day in the report. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// The day could not be validated (unknown label, malformed time).
    Invalid,
    Today,
    HasIssues,
    Clean,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Invalid => "invalid",
            DayStatus::Today => "today",
            DayStatus::HasIssues => "has_issues",
            DayStatus::Clean => "clean",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub date: String,
    pub status: DayStatus,
    pub issues: Vec<ValidationIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewEntry {
    pub date: String,
    pub issue_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub today: String,
    pub days: Vec<DayReport>,
    /// Has-issues days in input order.
    pub overview: Vec<OverviewEntry>,
    pub month: MonthOutcome,
}

impl ValidationReport {
    pub fn total_issues(&self) -> usize {
        self.days.iter().map(|d| d.issues.len()).sum()
    }

    pub fn invalid_days(&self) -> impl Iterator<Item = &DayReport> {
        self.days.iter().filter(|d| d.status == DayStatus::Invalid)
    }

    pub fn day(&self, date: &str) -> Option<&DayReport> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Days a user has to look at: overview entries plus invalid days.
    pub fn findings(&self) -> usize {
        self.overview.len() + self.invalid_days().count()
    }

    pub fn has_findings(&self) -> bool {
        self.findings() > 0
    }
}
