use super::kinds::separator;
use super::resolve_today;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::EventCatalog;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::extract::load_sheet;
use crate::ui::report::print_report;

/// Handle the `check` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        file,
        format,
        today,
        no_date_check,
        show_clean,
        strict,
    } = cmd
    {
        let today = resolve_today(today)?;
        let sheet = load_sheet(file, *format)?;
        let catalog = EventCatalog::from_config(cfg);

        let report = Core::audit(
            &sheet,
            &catalog,
            cfg,
            &today,
            Core::options(cfg, !*no_date_check),
        )?;

        print_report(&report, *show_clean, separator(cfg));

        if *strict && report.has_findings() {
            return Err(AppError::IssuesFound(report.findings()));
        }
    }
    Ok(())
}
