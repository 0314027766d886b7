use super::week_key::WeekKey;

/// Figures shown next to a day: declared hours and km as entered,
/// working and break hours as computed from the activities.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DaySummary {
    pub declared_hours: f64,
    pub working_hours: f64,
    pub break_hours: f64,
    pub km: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekSummary {
    pub days: Vec<(WeekKey, DaySummary)>,
    pub declared_hours: f64,
    pub working_hours: f64,
    pub km: f64,
}
