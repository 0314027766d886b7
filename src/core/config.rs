use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        println!("{}", content);
        Ok(())
    }

    pub fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    pub fn edit(path: &Path, editor: &str) -> AppResult<()> {
        let status = Command::new(editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("{editor}: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::Config(format!("editor '{editor}' exited with {status}")))
        }
    }
}
