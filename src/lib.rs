//! rAttendance library root.
//! Exposes the validation core (catalog, day validator, month accounting,
//! report), the month-sheet extraction, the CLI parser and the high-level
//! run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod extract;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Kinds => cli::commands::kinds::handle(cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ `init` writes the config, everything else reads it once
    let cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(cli.config.as_deref())?,
    };

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
