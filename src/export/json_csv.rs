// src/export/json_csv.rs

use super::model::report_to_rows;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::report::ValidationReport;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed: the whole report.
pub(crate) fn export_json(report: &ValidationReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(report)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header included thanks to serde): one row per finding.
pub(crate) fn export_csv(report: &ValidationReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let rows = report_to_rows(report);

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    if rows.is_empty() {
        // serde only writes the header together with the first record
        wtr.write_record(["date", "status", "code", "event_index", "message"])?;
    }

    for item in &rows {
        wtr.serialize(item)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
