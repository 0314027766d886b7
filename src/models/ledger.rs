use super::{activity::ActivityRecord, day_entry::DayEntry, week_key::WeekKey};
use std::ops::Index;

/// The whole logbook week: always exactly one `DayEntry` per `WeekKey`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekLedger {
    days: [DayEntry; 7],
}

impl WeekLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, day: WeekKey) -> &DayEntry {
        &self.days[day.index()]
    }

    pub fn day_mut(&mut self, day: WeekKey) -> &mut DayEntry {
        &mut self.days[day.index()]
    }

    /// Days in fixed Monday..Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = (WeekKey, &DayEntry)> {
        WeekKey::ALL.into_iter().zip(self.days.iter())
    }

    /// Appends `record` to the day; ordering is applied only when reading.
    pub fn add_activity(&mut self, day: WeekKey, record: ActivityRecord) {
        self.day_mut(day).activities.push(record);
    }

    /// Removes the record at zero-based `index`, `None` when there is none.
    pub fn remove_activity(&mut self, day: WeekKey, index: usize) -> Option<ActivityRecord> {
        let activities = &mut self.day_mut(day).activities;
        (index < activities.len()).then(|| activities.remove(index))
    }

    pub fn set_totals(&mut self, day: WeekKey, total_hours: Option<f64>, km: Option<f64>) {
        let entry = self.day_mut(day);
        if let Some(h) = total_hours {
            entry.total_hours = h;
        }
        if let Some(k) = km {
            entry.km = k;
        }
    }

    pub fn clear_day(&mut self, day: WeekKey) {
        *self.day_mut(day) = DayEntry::default();
    }

    pub fn clear(&mut self) {
        self.days = Default::default();
    }

    pub fn activity_count(&self) -> usize {
        self.days.iter().map(|d| d.activities.len()).sum()
    }
}

impl Index<WeekKey> for WeekLedger {
    type Output = DayEntry;

    fn index(&self, day: WeekKey) -> &DayEntry {
        self.day(day)
    }
}
