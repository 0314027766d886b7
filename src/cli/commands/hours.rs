use crate::cli::commands::parse_optional_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::core::calculator::hours;
use crate::errors::AppResult;
use crate::utils::formatting::{fmt_hours, pad_right};

pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Hours { day } = cmd {
        if let Some(d) = parse_optional_day(day)? {
            let h = hours::compute_day_working_hours(&session.ledger, d);
            println!("{} {}", pad_right(d.label(cfg.language), 12), fmt_hours(h));
            return Ok(());
        }

        for (d, entry) in session.ledger.iter() {
            println!(
                "{} {}",
                pad_right(d.label(cfg.language), 12),
                fmt_hours(hours::day_working_hours(entry))
            );
        }

        let total = hours::compute_week_working_hours(&session.ledger);
        println!("Gesamte Arbeitsstunden: {}", fmt_hours(total));
    }
    Ok(())
}
