use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::core::calculator::hours;
use crate::core::document;
use crate::errors::AppResult;
use crate::utils::formatting::fmt_hours;

/// Prints the collected data as JSON, followed by the week's working hours.
pub fn handle(cmd: &Commands, _cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Show = cmd {
        println!("--- Gesammelte Daten ---");
        println!("{}", document::to_json_string(&session.ledger)?);
        println!("----------------------");
        println!(
            "Gesamte Arbeitsstunden (ohne Pausen): {}",
            fmt_hours(hours::compute_week_working_hours(&session.ledger))
        );
    }
    Ok(())
}
