use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{check_config_file, run_config_migration};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = &cfg.path;

        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):\n", path.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if (*check || *migrate || *edit_config) && !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist (run `rattendance init` first)",
                path.display()
            )));
        }

        // ---- CHECK CONFIG ----
        if *check {
            let report = check_config_file(path)?;
            if report.is_clean() {
                success("Configuration file is complete.");
            }
            for key in &report.missing {
                warning(format!("Missing field: {key}"));
            }
            for key in &report.unknown {
                warning(format!("Unknown field: {key}"));
            }
        }

        // ---- MIGRATE CONFIG ----
        if *migrate && !run_config_migration(path)? {
            info("Configuration already up to date.");
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    match Command::new(&default_editor).arg(path).status() {
                        Ok(s) if s.success() => success(format!(
                            "Configuration file edited successfully using fallback '{}'",
                            default_editor
                        )),
                        Ok(_) | Err(_) => error(format!(
                            "Failed to edit configuration file using fallback '{}'",
                            default_editor
                        )),
                    }
                }
            }
        }
    }

    Ok(())
}
