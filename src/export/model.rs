// src/export/model.rs

use crate::models::WeekLedger;
use serde::Serialize;

/// Flat row, one per activity, for CSV export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ActivityRow {
    pub day: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub start: f64,
    pub end: f64,
    pub note: String,
}

/// Header per CSV
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["day", "type", "start", "end", "note"]
}

/// Rows in day order, activities in insertion order.
pub(crate) fn ledger_to_rows(ledger: &WeekLedger) -> Vec<ActivityRow> {
    ledger
        .iter()
        .flat_map(|(day, entry)| {
            entry.activities.iter().map(move |a| ActivityRow {
                day: day.name().to_string(),
                kind: a.kind.code().to_string(),
                start: a.start,
                end: a.end,
                note: a.note_str().to_string(),
            })
        })
        .collect()
}
