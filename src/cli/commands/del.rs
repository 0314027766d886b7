use crate::cli::commands::{ask_confirmation, parse_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::fmt_hours;

pub fn handle(cmd: &Commands, _cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Del { day, index, yes } = cmd {
        let d = parse_day(day)?;

        //
        // Confirmation prompt (only for a whole day)
        //
        if index.is_none()
            && !*yes
            && !ask_confirmation(&format!("Delete ALL data for {}? This action is irreversible.", d))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        match DeleteLogic::apply(session, d, *index)? {
            Some(removed) => success(format!(
                "Removed {} {}-{} from {}.",
                removed.kind.code(),
                fmt_hours(removed.start),
                fmt_hours(removed.end),
                d
            )),
            None => success(format!("All data for {} has been deleted.", d)),
        }

        session.save()?;
    }

    Ok(())
}
