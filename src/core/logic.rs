use crate::core::calculator::hours;
use crate::models::day_summary::{DaySummary, WeekSummary};
use crate::models::{DayEntry, WeekLedger};

pub struct Core;

impl Core {
    pub fn build_daily_summary(entry: &DayEntry) -> DaySummary {
        DaySummary {
            declared_hours: entry.total_hours,
            working_hours: hours::day_working_hours(entry),
            break_hours: hours::day_break_hours(entry),
            km: entry.km,
        }
    }

    pub fn build_week_summary(ledger: &WeekLedger) -> WeekSummary {
        let mut week = WeekSummary::default();

        for (day, entry) in ledger.iter() {
            let s = Self::build_daily_summary(entry);
            week.declared_hours += s.declared_hours;
            week.working_hours += s.working_hours;
            week.km += s.km;
            week.days.push((day, s));
        }

        week
    }
}
