use serde::{Deserialize, Serialize};
use std::fmt;

/// One day of the fixed Monday..Sunday logbook week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WeekKey {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Day label language used by the CLI and the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
}

impl WeekKey {
    pub const ALL: [WeekKey; 7] = [
        WeekKey::Monday,
        WeekKey::Tuesday,
        WeekKey::Wednesday,
        WeekKey::Thursday,
        WeekKey::Friday,
        WeekKey::Saturday,
        WeekKey::Sunday,
    ];

    /// Position inside the week (Monday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// English name, used as key in the persisted JSON document.
    pub fn name(self) -> &'static str {
        match self {
            WeekKey::Monday => "Monday",
            WeekKey::Tuesday => "Tuesday",
            WeekKey::Wednesday => "Wednesday",
            WeekKey::Thursday => "Thursday",
            WeekKey::Friday => "Friday",
            WeekKey::Saturday => "Saturday",
            WeekKey::Sunday => "Sunday",
        }
    }

    pub fn german_name(self) -> &'static str {
        match self {
            WeekKey::Monday => "Montag",
            WeekKey::Tuesday => "Dienstag",
            WeekKey::Wednesday => "Mittwoch",
            WeekKey::Thursday => "Donnerstag",
            WeekKey::Friday => "Freitag",
            WeekKey::Saturday => "Samstag",
            WeekKey::Sunday => "Sonntag",
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::De => self.german_name(),
            Language::En => self.name(),
        }
    }

    /// Exact (case-sensitive) match on the persisted English key.
    pub fn from_key(key: &str) -> Option<Self> {
        WeekKey::ALL.into_iter().find(|d| d.name() == key)
    }

    /// Lenient parser for user input: English or German names in any case,
    /// or the ISO weekday number 1..=7.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();

        if let Ok(n) = s.parse::<usize>() {
            return (1..=7).contains(&n).then(|| WeekKey::ALL[n - 1]);
        }

        WeekKey::ALL.into_iter().find(|d| {
            d.name().eq_ignore_ascii_case(s) || d.german_name().eq_ignore_ascii_case(s)
        })
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
