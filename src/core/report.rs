//! Aggregation of the per-day results and the month accounting.

use crate::core::calculator;
use crate::core::catalog::EventCatalog;
use crate::core::validator::{ValidatorOptions, validate_day};
use crate::models::day::DayRecord;
use crate::models::report::{DayReport, DayStatus, OverviewEntry, ValidationReport};
use crate::models::summary::MonthOutcome;
use crate::models::worked::WorkedTimeEntry;

/// Everything a run needs besides the data itself.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub catalog: &'a EventCatalog,
    /// Current day token, read once per run.
    pub today: &'a str,
    pub options: ValidatorOptions,
    pub daily_required_hours: i64,
}

pub fn build_report(
    days: &[DayRecord],
    worked: &[WorkedTimeEntry],
    total_working_days: i64,
    ctx: &ReportContext<'_>,
) -> ValidationReport {
    let month = calculator::evaluate(worked, total_working_days, ctx.daily_required_hours);
    report_with_month(days, month, ctx)
}

/// Validate every day and attach an already computed month outcome.
pub fn report_with_month(
    days: &[DayRecord],
    month: MonthOutcome,
    ctx: &ReportContext<'_>,
) -> ValidationReport {
    let mut reports = Vec::with_capacity(days.len());
    let mut overview = Vec::new();

    // Invalid takes precedence over Today: a broken record dated today is
    // still reported as Invalid.
    for day in days {
        let report = match validate_day(day, ctx.catalog, ctx.options) {
            Err(e) => {
                log::info!("day {} could not be validated: {e}", day.date);
                DayReport {
                    date: day.date.clone(),
                    status: DayStatus::Invalid,
                    issues: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
            Ok(issues) => {
                let status = if day.date == ctx.today {
                    DayStatus::Today
                } else if !issues.is_empty() {
                    overview.push(OverviewEntry {
                        date: day.date.clone(),
                        issue_count: issues.len(),
                    });
                    DayStatus::HasIssues
                } else {
                    DayStatus::Clean
                };

                DayReport {
                    date: day.date.clone(),
                    status,
                    issues,
                    error: None,
                }
            }
        };
        reports.push(report);
    }

    log::debug!(
        "validated {} day(s): {} with issues",
        reports.len(),
        overview.len()
    );

    ValidationReport {
        today: ctx.today.to_string(),
        days: reports,
        overview,
        month,
    }
}
