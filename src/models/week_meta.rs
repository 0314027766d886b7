use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate};

/// Page heading data for a rendered week.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekMeta {
    pub date_range: String,
    pub responsible_person: String,
    pub week_number: u32,
}

impl WeekMeta {
    pub fn new(date_range: impl Into<String>, person: impl Into<String>, week: u32) -> Self {
        Self {
            date_range: date_range.into(),
            responsible_person: person.into(),
            week_number: week,
        }
    }

    /// Builds the heading for the ISO week containing `date`:
    /// Monday..Sunday as `dd.mm.yyyy bis dd.mm.yyyy` and the ISO week number.
    pub fn for_date(date: NaiveDate, person: impl Into<String>) -> Self {
        let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
        let sunday = monday + Duration::days(6);

        Self {
            date_range: format!(
                "{} bis {}",
                monday.format("%d.%m.%Y"),
                sunday.format("%d.%m.%Y")
            ),
            responsible_person: person.into(),
            week_number: date.iso_week().week(),
        }
    }

    pub fn parse_for_date(date: &str, person: impl Into<String>) -> AppResult<Self> {
        let d = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(date.to_string()))?;
        Ok(Self::for_date(d, person))
    }

    pub fn heading(&self) -> String {
        format!(
            "Wochenbericht vom {}   Monteur: {}   Woche: {}",
            self.date_range, self.responsible_person, self.week_number
        )
    }
}
