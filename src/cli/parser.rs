use crate::export::ExportFormat;
use crate::extract::SheetFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rAttendance
/// CLI application to audit monthly attendance punches
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Audit attendance punches day by day and estimate the daily quota left for the month",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or alternative rule sets)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a configuration file with the default event catalog
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List the event kinds of the active catalog
    Kinds,

    /// Validate every working day of a month sheet and print the report
    Check {
        /// Month sheet (JSON, YAML or CSV)
        file: PathBuf,

        #[arg(long, value_enum, help = "Sheet format (default: from the file extension)")]
        format: Option<SheetFormat>,

        #[arg(long, value_name = "DD.MM.YY", help = "Date treated as today")]
        today: Option<String>,

        #[arg(long = "no-date-check", help = "Skip the date tag consistency check")]
        no_date_check: bool,

        #[arg(long = "all", help = "Also show days without issues")]
        show_clean: bool,

        #[arg(long, help = "Exit with an error when any day has issues")]
        strict: bool,
    },

    /// Month accounting only: worked vs. required time and the daily quota
    Summary {
        file: PathBuf,

        #[arg(long, value_enum)]
        format: Option<SheetFormat>,

        #[arg(long, help = "Required hours per working day (default: from config)")]
        hours: Option<i64>,
    },

    /// Export the validation report
    Export {
        file: PathBuf,

        #[arg(long = "sheet-format", value_enum)]
        sheet_format: Option<SheetFormat>,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        out: PathBuf,

        #[arg(long, value_name = "DD.MM.YY")]
        today: Option<String>,

        #[arg(long = "no-date-check")]
        no_date_check: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing output file without asking")]
        force: bool,

        #[arg(
            long = "no-input",
            conflicts_with = "force",
            help = "Never prompt: fail if the output file already exists"
        )]
        no_input: bool,
    },
}
