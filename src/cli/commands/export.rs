use super::resolve_today;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::EventCatalog;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::{ExportLogic, OverwritePolicy};
use crate::extract::load_sheet;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        sheet_format,
        format,
        out,
        today,
        no_date_check,
        force,
        no_input,
    } = cmd
    {
        let today = resolve_today(today)?;
        let sheet = load_sheet(file, *sheet_format)?;
        let catalog = EventCatalog::from_config(cfg);

        let report = Core::audit(
            &sheet,
            &catalog,
            cfg,
            &today,
            Core::options(cfg, !*no_date_check),
        )?;

        ExportLogic::export(
            &report,
            *format,
            out,
            OverwritePolicy::from_flags(*force, *no_input),
        )?;
    }
    Ok(())
}
