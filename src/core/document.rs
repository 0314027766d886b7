//! Conversion between the in-memory `WeekLedger` and the persisted JSON
//! document (`{"Monday": {"total_hours", "km", "activities"}, ...}`).

use crate::errors::{AppError, AppResult};
use crate::models::{ActivityRecord, ActivityType, DayEntry, WeekKey, WeekLedger};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Exported form of one activity; `note` is always present.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ActivityDocument {
    #[serde(rename = "type")]
    pub kind: String,
    pub start: f64,
    pub end: f64,
    pub note: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayDocument {
    pub total_hours: f64,
    pub km: f64,
    pub activities: Vec<ActivityDocument>,
}

/// The whole week, serialized as a map in Monday..Sunday order.
#[derive(Clone, Debug, PartialEq)]
pub struct WeekDocument {
    pub days: Vec<(WeekKey, DayDocument)>,
}

impl Serialize for WeekDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, doc) in &self.days {
            map.serialize_entry(day.name(), doc)?;
        }
        map.end()
    }
}

/// What was left out while reading a document.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadReport {
    /// Activities dropped because `start` or `end` was not numeric.
    pub skipped: usize,
    /// Top-level keys that are not English day names.
    pub ignored_keys: Vec<String>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped == 0 && self.ignored_keys.is_empty()
    }
}

pub fn to_exportable(ledger: &WeekLedger) -> WeekDocument {
    let days = ledger
        .iter()
        .map(|(day, entry)| (day, day_to_document(entry)))
        .collect();

    WeekDocument { days }
}

fn day_to_document(entry: &DayEntry) -> DayDocument {
    DayDocument {
        total_hours: entry.total_hours,
        km: entry.km,
        activities: entry
            .activities
            .iter()
            .map(|a| ActivityDocument {
                kind: a.kind.code().to_string(),
                start: a.start,
                end: a.end,
                note: a.note_str().to_string(),
            })
            .collect(),
    }
}

pub fn to_json_string(ledger: &WeekLedger) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&to_exportable(ledger))?)
}

/// Inverse of [`to_exportable`].
///
/// Absent days stay empty, missing or non-numeric totals become 0 and
/// activities without a numeric `start`/`end` are dropped and counted.
/// Only a document that is not a JSON object is rejected.
pub fn from_document(doc: &Value) -> AppResult<(WeekLedger, LoadReport)> {
    let obj = doc
        .as_object()
        .ok_or_else(|| AppError::InvalidDocument("top level must be an object".into()))?;

    let mut ledger = WeekLedger::new();
    let mut report = LoadReport::default();

    for (key, value) in obj {
        match WeekKey::from_key(key) {
            Some(day) => *ledger.day_mut(day) = day_from_value(value, &mut report),
            None => report.ignored_keys.push(key.clone()),
        }
    }

    Ok((ledger, report))
}

pub fn from_json_str(s: &str) -> AppResult<(WeekLedger, LoadReport)> {
    let value: Value = serde_json::from_str(s)?;
    from_document(&value)
}

fn day_from_value(value: &Value, report: &mut LoadReport) -> DayEntry {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    let mut entry = DayEntry {
        total_hours: obj.get("total_hours").and_then(number_of).unwrap_or(0.0),
        km: obj.get("km").and_then(number_of).unwrap_or(0.0),
        activities: Vec::new(),
    };

    if let Some(list) = obj.get("activities").and_then(Value::as_array) {
        for item in list {
            match activity_from_value(item) {
                Some(a) => entry.activities.push(a),
                None => report.skipped += 1,
            }
        }
    }

    entry
}

fn activity_from_value(value: &Value) -> Option<ActivityRecord> {
    let obj = value.as_object()?;
    let start = obj.get("start").and_then(number_of)?;
    let end = obj.get("end").and_then(number_of)?;

    let kind = match obj.get("type") {
        Some(Value::String(code)) => ActivityType::from_code(code),
        Some(Value::Null) | None => ActivityType::Driving,
        Some(other) => ActivityType::Other(other.to_string()),
    };

    let note = match obj.get("note") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(other) => Some(other.to_string()),
    };

    Some(ActivityRecord::new(kind, start, end, note))
}

/// JSON numbers, or strings holding a number (form fields were saved as text).
fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => crate::core::input::parse_number(s),
        _ => None,
    }
}
