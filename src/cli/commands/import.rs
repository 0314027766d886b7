use crate::cli::commands::report_load;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::core::calculator::hours;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::fmt_hours;
use crate::utils::path::expand_tilde;

/// Replace the ledger with a JSON file. On error the ledger file is untouched.
pub fn handle(cmd: &Commands, _cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);

        let report = session.load_from(&path)?;
        report_load(&report);
        session.save()?;

        success(format!("Data loaded from {}", path.display()));
        info(format!(
            "Gesamte Arbeitsstunden: {}",
            fmt_hours(hours::compute_week_working_hours(&session.ledger))
        ));
    }
    Ok(())
}
