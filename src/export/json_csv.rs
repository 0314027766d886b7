// src/export/json_csv.rs

use crate::core::document;
use crate::errors::{AppError, AppResult};
use crate::export::model::{ActivityRow, get_headers};
use crate::export::notify_export_success;
use crate::models::WeekLedger;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed, same shape as the ledger file.
pub(crate) fn export_json(ledger: &WeekLedger, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = document::to_json_string(ledger)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header incluso grazie a serde).
pub(crate) fn export_csv(rows: &[ActivityRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    // serde writes the header with the first row only
    if rows.is_empty() {
        wtr.write_record(get_headers())
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
