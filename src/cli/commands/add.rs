use crate::cli::commands::parse_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::fmt_hours;

/// Add an activity row to a day.
pub fn handle(cmd: &Commands, _cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Add {
        day,
        kind,
        start,
        end,
        note,
    } = cmd
    {
        let d = parse_day(day)?;

        let total = AddLogic::apply(session, d, kind, start, end, note.as_deref())?;
        session.save()?;

        info(format!("Working hours {}: {}", d, fmt_hours(total)));
    }
    Ok(())
}
