use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, _cfg: &Config, session: &mut Session) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        ExportLogic::export(session, *format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
