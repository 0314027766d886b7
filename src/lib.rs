//! weeklog library root.
//! Exposes the ledger model, the chart renderer, the CLI parser and the
//! high-level run() function.

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::commands;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::Session;
use crate::core::document::LoadReport;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use clap::Parser;

/// Central command dispatcher.
///
/// Every ledger command works on the one `Session` opened here; a failing
/// command returns before `save`, so the ledger file keeps its prior state.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => return commands::init::handle(cli),
        Commands::Config { .. } => return commands::config::handle(&cli.command, cfg),
        _ => {}
    }

    // import and clear overwrite the whole week: an unreadable file must not block them
    let replaces_ledger = matches!(
        cli.command,
        Commands::Import { .. } | Commands::Clear { .. }
    );
    let path = cfg.ledger_path();
    let (mut session, report) = match Session::open(&path) {
        Ok(opened) => opened,
        Err(e) if replaces_ledger => {
            warning(format!(
                "Ledger {} unreadable ({e}), starting from an empty week",
                path.display()
            ));
            (Session::new(&path), LoadReport::default())
        }
        Err(e) => return Err(e),
    };
    commands::report_load(&report);

    let s = &mut session;
    match &cli.command {
        Commands::Add { .. } => commands::add::handle(&cli.command, cfg, s),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg, s),
        Commands::Set { .. } => commands::set::handle(&cli.command, cfg, s),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg, s),
        Commands::Hours { .. } => commands::hours::handle(&cli.command, cfg, s),
        Commands::Show => commands::show::handle(&cli.command, cfg, s),
        Commands::Clear { .. } => commands::clear::handle(&cli.command, cfg, s),
        Commands::Import { .. } => commands::import::handle(&cli.command, cfg, s),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg, s),
        Commands::Chart { .. } => commands::chart::handle(&cli.command, cfg, s),
        Commands::Init | Commands::Config { .. } => Ok(()),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta (defaults in test mode)
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    // 3️⃣ applica eventuale override del ledger da riga di comando
    if let Some(custom) = &cli.ledger {
        cfg.ledger = custom.clone();
    }

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
