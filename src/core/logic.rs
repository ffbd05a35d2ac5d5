use crate::config::Config;
use crate::core::calculator;
use crate::core::catalog::EventCatalog;
use crate::core::report::{ReportContext, report_with_month};
use crate::core::validator::ValidatorOptions;
use crate::errors::{AppError, AppResult};
use crate::extract::DaySource;
use crate::models::report::ValidationReport;
use crate::models::summary::MonthOutcome;

pub struct Core;

impl Core {
    pub fn options(cfg: &Config, date_check: bool) -> ValidatorOptions {
        ValidatorOptions {
            date_check: cfg.date_check && date_check,
        }
    }

    /// Full audit of one month: per-day validation plus month accounting.
    ///
    /// Unusable worked labels only make the month part unavailable; the days
    /// are still checked.
    pub fn audit(
        source: &dyn DaySource,
        catalog: &EventCatalog,
        cfg: &Config,
        today: &str,
        options: ValidatorOptions,
    ) -> AppResult<ValidationReport> {
        let days = source.working_days();
        let month = match source.worked_entries() {
            Ok(worked) => calculator::evaluate(
                &worked,
                source.working_day_count() as i64,
                cfg.daily_required_hours,
            ),
            Err(e) => MonthOutcome::unavailable(e),
        };

        let ctx = ReportContext {
            catalog,
            today,
            options,
            daily_required_hours: cfg.daily_required_hours,
        };

        Ok(report_with_month(&days, month, &ctx))
    }

    /// Month accounting only. Unlike [`Core::audit`], a bad worked label or
    /// out-of-range hours are errors here.
    pub fn month(source: &dyn DaySource, daily_required_hours: i64) -> AppResult<MonthOutcome> {
        let worked = source.worked_entries()?;
        let total_working_days = source.working_day_count() as i64;
        match calculator::summarize(&worked, total_working_days, daily_required_hours) {
            Ok(summary) => Ok(MonthOutcome::Quota(summary)),
            Err(AppError::NoRemainingDays) => Ok(calculator::evaluate(
                &worked,
                total_working_days,
                daily_required_hours,
            )),
            Err(e) => Err(e),
        }
    }
}
