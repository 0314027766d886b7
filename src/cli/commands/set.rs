use crate::cli::commands::parse_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::core::add::AddLogic;
use crate::core::input::parse_number;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::{fmt_compact, fmt_hours};

pub fn handle(cmd: &Commands, _cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Set { day, hours, km } = cmd {
        let d = parse_day(day)?;

        for (field, value) in [("hours", hours), ("km", km)] {
            if let Some(v) = value
                && parse_number(v).is_none()
            {
                warning(format!("Invalid {} '{}' for {}: using 0", field, v, d));
            }
        }

        AddLogic::set_totals(session, d, hours.as_deref(), km.as_deref());
        session.save()?;

        let entry = session.ledger.day(d);
        success(format!(
            "{}: Std. {}  km {}",
            d,
            fmt_hours(entry.total_hours),
            fmt_compact(entry.km)
        ));
    }
    Ok(())
}
