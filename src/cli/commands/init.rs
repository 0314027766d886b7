use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::Session;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty ledger, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let ledger_path = Config::init_all(cli.ledger.clone(), cli.test)?;

    info("Initializing weeklog…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Ledger      : {}", ledger_path.display()));

    if ledger_path.exists() {
        info("Ledger already present, left untouched.");
    } else {
        Session::new(&ledger_path).save()?;
        success(format!("Empty week created at {}", ledger_path.display()));
    }

    success("weeklog initialization completed!");
    Ok(())
}
