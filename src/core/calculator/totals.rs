//! Month totals: required vs. worked minutes over the working days.

use super::check_daily_required_hours;
use crate::errors::{AppError, AppResult};
use crate::models::summary::MonthTotals;
use crate::models::worked::WorkedTimeEntry;

pub fn tally(
    entries: &[WorkedTimeEntry],
    total_working_days: i64,
    daily_required_hours: i64,
) -> AppResult<MonthTotals> {
    let daily_required_hours = check_daily_required_hours(daily_required_hours)?;
    let logged: Vec<&WorkedTimeEntry> = entries.iter().filter(|e| !e.is_zero()).collect();

    let logged_days = logged.len() as i64;
    let worked_minutes_total: i64 = logged.iter().map(|e| e.total_minutes()).sum();
    let required_minutes_total = total_working_days
        .checked_mul(daily_required_hours * 60)
        .ok_or_else(|| {
            AppError::Other(format!(
                "required minutes overflow for {total_working_days} working day(s)"
            ))
        })?;

    Ok(MonthTotals {
        required_minutes_total,
        worked_minutes_total,
        remaining_minutes: required_minutes_total - worked_minutes_total,
        logged_days,
        days_without_entry: total_working_days - logged_days,
    })
}
