pub mod check;
pub mod config;
pub mod export;
pub mod init;
pub mod kinds;
pub mod summary;

use crate::errors::{AppError, AppResult};
use crate::utils::date::{is_day_token, today_token};

/// `--today` if given (validated), the local date otherwise.
pub(crate) fn resolve_today(today: &Option<String>) -> AppResult<String> {
    match today {
        Some(t) if is_day_token(t) => Ok(t.clone()),
        Some(t) => Err(AppError::InvalidDate(t.clone())),
        None => Ok(today_token()),
    }
}
