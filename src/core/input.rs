//! Boundary between raw user input (CLI arguments, form text) and the ledger.

use crate::errors::{AppError, AppResult};
use crate::models::{ActivityRecord, ActivityType};

/// Parses a decimal number, accepting `,` as decimal separator ("7,5").
pub fn parse_number(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Totals and km fields: anything unparsable counts as 0.
pub fn parse_lenient(s: &str) -> f64 {
    parse_number(s).unwrap_or(0.0)
}

pub fn parse_required(field: &'static str, s: &str) -> AppResult<f64> {
    parse_number(s).ok_or_else(|| AppError::InvalidNumber {
        field,
        value: s.to_string(),
    })
}

/// Builds an activity row; a non-numeric start or end rejects the whole row.
pub fn parse_activity(
    kind: &str,
    start: &str,
    end: &str,
    note: Option<&str>,
) -> AppResult<ActivityRecord> {
    let start = parse_required("start", start)?;
    let end = parse_required("end", end)?;

    Ok(ActivityRecord::new(
        ActivityType::from_input(kind),
        start,
        end,
        note.map(str::to_string),
    ))
}
