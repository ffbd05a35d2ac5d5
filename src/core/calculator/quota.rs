//! Daily quota: remaining minutes spread over the working days without a
//! logged entry.

use super::totals::tally;
use crate::errors::{AppError, AppResult};
use crate::models::summary::{MonthOutcome, MonthSummary, MonthTotals};
use crate::models::worked::WorkedTimeEntry;

fn with_quota(totals: MonthTotals) -> AppResult<MonthSummary> {
    if totals.days_without_entry <= 0 {
        return Err(AppError::NoRemainingDays);
    }

    Ok(MonthSummary {
        required_minutes_total: totals.required_minutes_total,
        worked_minutes_total: totals.worked_minutes_total,
        remaining_minutes: totals.remaining_minutes,
        logged_days: totals.logged_days,
        days_without_entry: totals.days_without_entry,
        required_minutes_per_remaining_day: totals.remaining_minutes as f64
            / totals.days_without_entry as f64,
    })
}

/// Fails with [`AppError::NoRemainingDays`] when every working day already
/// has logged time, and with [`AppError::InvalidRequiredHours`] outside
/// `1..=24` hours.
pub fn summarize(
    entries: &[WorkedTimeEntry],
    total_working_days: i64,
    daily_required_hours: i64,
) -> AppResult<MonthSummary> {
    with_quota(tally(entries, total_working_days, daily_required_hours)?)
}

/// Like [`summarize`], but keeps the totals when no quota applies and turns
/// any other failure into [`MonthOutcome::Unavailable`].
pub fn evaluate(
    entries: &[WorkedTimeEntry],
    total_working_days: i64,
    daily_required_hours: i64,
) -> MonthOutcome {
    let totals = match tally(entries, total_working_days, daily_required_hours) {
        Ok(totals) => totals,
        Err(e) => return MonthOutcome::unavailable(e),
    };
    match with_quota(totals) {
        Ok(summary) => MonthOutcome::Quota(summary),
        Err(_) => {
            log::info!(
                "all {} working day(s) have logged time, no daily quota",
                totals.logged_days
            );
            MonthOutcome::NoRemainingDays(totals)
        }
    }
}
