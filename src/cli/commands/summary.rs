use super::kinds::separator;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::calculator::check_daily_required_hours;
use crate::errors::AppResult;
use crate::extract::{DaySource, load_sheet};
use crate::ui::report::render_month;

/// Handle the `summary` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        file,
        format,
        hours,
    } = cmd
    {
        let hours = check_daily_required_hours(hours.unwrap_or(cfg.daily_required_hours))?;

        let sheet = load_sheet(file, *format)?;
        let outcome = Core::month(&sheet, hours)?;

        println!(
            "{} working day(s), {} h required per day\n",
            sheet.working_day_count(),
            hours
        );
        print!("{}", render_month(&outcome, separator(cfg)));
    }
    Ok(())
}
