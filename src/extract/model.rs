use crate::errors::{AppError, AppResult};
use crate::models::day::DayRecord;
use crate::models::occurrence::EventOccurrence;
use crate::models::worked::WorkedTimeEntry;
use crate::utils::date::is_day_token;
use serde::{Deserialize, Serialize};

use super::DaySource;

/// Row kind on the timesheet. Only `Work` days count toward the month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    #[default]
    Work,
    Weekend,
    Holiday,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetDay {
    pub date: String,
    #[serde(default)]
    pub kind: DayKind,
    /// Free-text worked label, e.g. "worked: 07:30".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worked: Option<String>,
    #[serde(default)]
    pub events: Vec<EventOccurrence>,
}

impl SheetDay {
    pub fn is_working_day(&self) -> bool {
        self.kind == DayKind::Work
    }

    fn worked_label(&self) -> Option<&str> {
        self.worked
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
    }
}

/// One month of extracted timesheet rows, in table order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthSheet {
    pub days: Vec<SheetDay>,
}

impl MonthSheet {
    /// Reject sheets with malformed dates. Worked labels are parsed later,
    /// by [`DaySource::worked_entries`].
    pub fn check(&self) -> AppResult<()> {
        for day in &self.days {
            if !is_day_token(&day.date) {
                return Err(AppError::InvalidDate(day.date.clone()));
            }
        }
        Ok(())
    }
}

impl DaySource for MonthSheet {
    fn working_days(&self) -> Vec<DayRecord> {
        self.days
            .iter()
            .filter(|d| d.is_working_day())
            .map(|d| DayRecord::new(d.date.clone(), d.events.clone()))
            .collect()
    }

    fn worked_entries(&self) -> AppResult<Vec<WorkedTimeEntry>> {
        self.days
            .iter()
            .filter(|d| d.is_working_day())
            .filter_map(|d| d.worked_label())
            .map(WorkedTimeEntry::parse)
            .collect()
    }

    fn working_day_count(&self) -> usize {
        self.days.iter().filter(|d| d.is_working_day()).count()
    }
}
