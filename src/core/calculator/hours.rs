//! Working-hour aggregation.
//!
//! Working hours are the sum of `end - start` over every non-break activity.
//! Spans that are zero or negative are data-entry artifacts and are skipped,
//! never subtracted.

use crate::models::{DayEntry, WeekKey, WeekLedger};

pub fn day_working_hours(entry: &DayEntry) -> f64 {
    entry.activities.iter().map(|a| a.working_hours()).sum()
}

pub fn compute_day_working_hours(ledger: &WeekLedger, day: WeekKey) -> f64 {
    day_working_hours(ledger.day(day))
}

/// Sum of the seven day totals, Monday first.
pub fn compute_week_working_hours(ledger: &WeekLedger) -> f64 {
    WeekKey::ALL
        .into_iter()
        .map(|d| compute_day_working_hours(ledger, d))
        .sum()
}

/// Hours spent on breaks (positive spans only).
pub fn day_break_hours(entry: &DayEntry) -> f64 {
    entry
        .activities
        .iter()
        .filter(|a| a.kind.is_break() && a.span() > 0.0)
        .map(|a| a.span())
        .sum()
}
