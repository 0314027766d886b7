use crate::utils::colors::{Rgb, palette};
use serde::{Deserialize, Serialize};

/// Category of a logged activity.
///
/// The three known codes map to a fixed plotting lane and color. Any other
/// code read from a ledger file is kept as `Other` so that it survives a
/// load/save cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    Driving, // F (Fahren)
    Break,   // P (Pause)
    Work,    // A (Arbeit)
    Other(String),
}

/// Lane used by codes outside the known three.
pub const OTHER_LANE: usize = 3;

impl ActivityType {
    pub const KNOWN: [ActivityType; 3] =
        [ActivityType::Driving, ActivityType::Break, ActivityType::Work];

    pub fn code(&self) -> &str {
        match self {
            ActivityType::Driving => "F",
            ActivityType::Break => "P",
            ActivityType::Work => "A",
            ActivityType::Other(code) => code,
        }
    }

    /// Convert a stored code → enum. Unknown codes are retained verbatim.
    pub fn from_code(code: &str) -> Self {
        match code {
            "F" => ActivityType::Driving,
            "P" => ActivityType::Break,
            "A" => ActivityType::Work,
            other => ActivityType::Other(other.to_string()),
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_input(code: &str) -> Self {
        let trimmed = code.trim();
        match Self::from_code(&trimmed.to_uppercase()) {
            ActivityType::Other(_) => ActivityType::Other(trimmed.to_string()),
            known => known,
        }
    }

    pub fn lane(&self) -> usize {
        match self {
            ActivityType::Driving => 0,
            ActivityType::Break => 1,
            ActivityType::Work => 2,
            ActivityType::Other(_) => OTHER_LANE,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            ActivityType::Driving => palette::RED,
            ActivityType::Break => palette::YELLOW,
            ActivityType::Work => palette::BLUE,
            ActivityType::Other(_) => palette::GRAY,
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, ActivityType::Break)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ActivityType::Other(_))
    }

    pub fn description(&self) -> &str {
        match self {
            ActivityType::Driving => "Driving",
            ActivityType::Break => "Break",
            ActivityType::Work => "Work",
            ActivityType::Other(code) => code,
        }
    }
}

impl From<String> for ActivityType {
    fn from(s: String) -> Self {
        ActivityType::from_code(&s)
    }
}

impl From<ActivityType> for String {
    fn from(t: ActivityType) -> Self {
        t.code().to_string()
    }
}
