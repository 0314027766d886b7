// src/export/logic.rs

use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ledger_to_rows;
use crate::ui::messages::{info, warning};
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes the session ledger to `file`.
    ///
    /// - `json`: the ledger document, all seven days
    /// - `csv`: one row per activity (`day,type,start,end,note`)
    pub fn export(
        session: &Session,
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(file, force)?;
        info(format!(
            "Exporting {} activities as {}",
            session.ledger.activity_count(),
            format.as_str()
        ));

        match format {
            ExportFormat::Json => export_json(&session.ledger, file)?,
            ExportFormat::Csv => {
                let rows = ledger_to_rows(&session.ledger);
                if rows.is_empty() {
                    warning("No activities logged: the CSV will only contain the header.");
                }
                export_csv(&rows, file)?
            }
        }

        Ok(())
    }
}
