use super::activity_type::ActivityType;

/// One timed, typed interval of a logbook day.
///
/// `start` and `end` are hours of the day (`7.5` = 07:30). They are not
/// clamped to `[0, 24]` and `end <= start` is accepted here; the hour
/// aggregation simply ignores such records.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub kind: ActivityType,
    pub start: f64,
    pub end: f64,
    pub note: Option<String>,
}

impl ActivityRecord {
    /// Costruttore di alto livello: una nota vuota diventa `None`.
    /// Blank notes ("  ") are kept as given.
    pub fn new(kind: ActivityType, start: f64, end: f64, note: Option<String>) -> Self {
        Self {
            kind,
            start,
            end,
            note: note.filter(|n| !n.is_empty()),
        }
    }

    /// Raw `end - start`, possibly negative.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Duration counted as working time: breaks and non-positive spans are 0.
    pub fn working_hours(&self) -> f64 {
        let span = self.span();
        if self.kind.is_break() || span <= 0.0 {
            0.0
        } else {
            span
        }
    }

    pub fn note_str(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }
}
