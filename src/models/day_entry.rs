use super::activity::ActivityRecord;

/// One day of the ledger: the declared totals plus the logged activities.
///
/// `total_hours` is what the user reports for the day (it may include
/// mandated breaks) and is never derived from `activities`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayEntry {
    pub total_hours: f64,
    pub km: f64,
    pub activities: Vec<ActivityRecord>,
}

impl DayEntry {
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty() && self.total_hours == 0.0 && self.km == 0.0
    }

    /// Activities stably sorted by start time, each with its position in
    /// insertion order; equal starts keep insertion order.
    pub fn sorted_activities(&self) -> Vec<(usize, &ActivityRecord)> {
        let mut sorted: Vec<(usize, &ActivityRecord)> =
            self.activities.iter().enumerate().collect();
        sorted.sort_by(|a, b| a.1.start.total_cmp(&b.1.start));
        sorted
    }
}
