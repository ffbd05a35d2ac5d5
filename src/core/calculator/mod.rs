pub mod quota;
pub mod totals;

use crate::errors::{AppError, AppResult};

pub use quota::{evaluate, summarize};
pub use totals::tally;

/// Hours a working day counts for when the configuration does not say otherwise.
pub const DEFAULT_DAILY_REQUIRED_HOURS: i64 = 8;

/// Upper bound for the required hours of a single day.
pub const MAX_DAILY_REQUIRED_HOURS: i64 = 24;

/// Accept only `1..=MAX_DAILY_REQUIRED_HOURS`.
pub fn check_daily_required_hours(hours: i64) -> AppResult<i64> {
    if (1..=MAX_DAILY_REQUIRED_HOURS).contains(&hours) {
        Ok(hours)
    } else {
        Err(AppError::InvalidRequiredHours(hours))
    }
}
