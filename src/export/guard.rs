//! Protection of existing export files.

use crate::errors::{AppError, AppResult};
use std::io::{BufRead, Write};
use std::path::Path;

/// What to do when the export target already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Replace it without asking (`--force`).
    Overwrite,
    /// Ask on the terminal; anything but `y`/`yes` keeps the file.
    Prompt,
    /// Keep it and fail, without reading any input (`--no-input`).
    Refuse,
}

impl OverwritePolicy {
    pub fn from_flags(force: bool, no_input: bool) -> Self {
        match (force, no_input) {
            (true, _) => OverwritePolicy::Overwrite,
            (false, true) => OverwritePolicy::Refuse,
            (false, false) => OverwritePolicy::Prompt,
        }
    }
}

/// Decide whether `path` may be written. The answer to the prompt is read
/// from `input`, the question goes to `prompt`.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    policy: OverwritePolicy,
    mut input: R,
    mut prompt: W,
) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }

    let refused = || AppError::ExportRefused(path.display().to_string());

    match policy {
        OverwritePolicy::Overwrite => {
            log::info!("overwriting {}", path.display());
            Ok(())
        }
        OverwritePolicy::Refuse => Err(refused()),
        OverwritePolicy::Prompt => {
            write!(prompt, "'{}' already exists. Overwrite? [y/N]: ", path.display())?;
            prompt.flush()?;

            let mut answer = String::new();
            input.read_line(&mut answer)?;
            match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => Ok(()),
                _ => Err(refused()),
            }
        }
    }
}
