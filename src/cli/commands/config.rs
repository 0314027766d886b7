use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        // Path del file di configurazione
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            if path.exists() {
                ConfigLogic::print(&path)?;
            } else {
                warning(format!("{} not found, showing defaults:", path.display()));
                println!("{}", cfg.to_yaml()?);
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = ConfigLogic::default_editor();
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match ConfigLogic::edit(&path, &editor_to_use) {
                Ok(()) => success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                )),
                Err(e) if editor_to_use != default_editor => {
                    warning(format!("{e}, falling back to '{}'", default_editor));
                    ConfigLogic::edit(&path, &default_editor)?;
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(())
}
