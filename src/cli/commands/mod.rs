pub mod add;
pub mod chart;
pub mod clear;
pub mod config;
pub mod del;
pub mod export;
pub mod hours;
pub mod import;
pub mod init;
pub mod list;
pub mod set;
pub mod show;

use crate::core::document::LoadReport;
use crate::errors::{AppError, AppResult};
use crate::models::WeekKey;
use crate::ui::messages::warning;
use std::io::{self, Write};

pub(crate) fn parse_day(s: &str) -> AppResult<WeekKey> {
    WeekKey::parse(s).ok_or_else(|| AppError::InvalidDay(s.to_string()))
}

pub(crate) fn parse_optional_day(s: &Option<String>) -> AppResult<Option<WeekKey>> {
    s.as_deref().map(parse_day).transpose()
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Reports what a ledger load left out; never fatal.
pub(crate) fn report_load(report: &LoadReport) {
    if report.skipped > 0 {
        warning(format!(
            "Skipped {} activit{} with invalid start/end",
            report.skipped,
            if report.skipped == 1 { "y" } else { "ies" }
        ));
    }
    for key in &report.ignored_keys {
        warning(format!("Ignored unknown key '{}'", key));
    }
}
