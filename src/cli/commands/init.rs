use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::catalog::EventCatalog;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes the configuration file with the default settings and the full
/// built-in event catalog, ready to be edited.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = Config::resolve_path(cli.config.as_deref());

        info("Initializing rAttendance…");
        let cfg = Config::init_at(&path, *force)?;

        let kinds = EventCatalog::from_config(&cfg).len();
        success(format!(
            "Config file: {} ({} event kinds)",
            path.display(),
            kinds
        ));
    }
    Ok(())
}
