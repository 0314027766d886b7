use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, _cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes && !ask_confirmation("Delete ALL data of the week? This action is irreversible.") {
            info("Operation cancelled.");
            return Ok(());
        }

        DeleteLogic::clear_all(session);
        session.save()?;
        success("Gesamte Arbeitsstunden: 0.00");
    }
    Ok(())
}
