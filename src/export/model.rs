// src/export/model.rs

use crate::models::report::{DayStatus, ValidationReport};
use serde::Serialize;

/// Flat row for CSV export: one per issue, one per invalid day.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct IssueExport {
    pub date: String,
    pub status: String,
    pub code: String,
    pub event_index: Option<usize>,
    pub message: String,
}

pub(crate) fn report_to_rows(report: &ValidationReport) -> Vec<IssueExport> {
    let mut rows = Vec::new();

    for day in &report.days {
        if day.status == DayStatus::Invalid {
            rows.push(IssueExport {
                date: day.date.clone(),
                status: day.status.as_str().to_string(),
                code: "invalid_day".to_string(),
                event_index: None,
                message: day.error.clone().unwrap_or_default(),
            });
            continue;
        }

        for issue in &day.issues {
            rows.push(IssueExport {
                date: day.date.clone(),
                status: day.status.as_str().to_string(),
                code: issue.code.as_str().to_string(),
                event_index: issue.event_index,
                message: issue.message.clone(),
            });
        }
    }

    rows
}
