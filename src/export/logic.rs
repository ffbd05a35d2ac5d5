// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::guard::{OverwritePolicy, confirm_overwrite};
use crate::export::json_csv::{export_csv, export_json};
use crate::models::report::ValidationReport;
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// High-level export of a validation report.
pub struct ExportLogic;

impl ExportLogic {
    /// - `format`: csv | json
    /// - `file`: output path; an existing file is handled per `policy`, a
    ///   prompt reads its answer from stdin
    pub fn export(
        report: &ValidationReport,
        format: ExportFormat,
        file: &Path,
        policy: OverwritePolicy,
    ) -> AppResult<()> {
        confirm_overwrite(file, policy, io::stdin().lock(), io::stdout())?;

        if report.days.is_empty() {
            warning("No working days in the sheet; exporting an empty report.");
        }

        match format {
            ExportFormat::Csv => export_csv(report, file),
            ExportFormat::Json => export_json(report, file),
        }
    }
}
