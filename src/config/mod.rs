use crate::chart::ChartMode;
use crate::errors::AppResult;
use crate::models::week_key::Language;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_ledger")]
    pub ledger: String,
    #[serde(default)]
    pub responsible_person: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub chart_mode: ChartMode,
    #[serde(default = "default_show_break_hint")]
    pub show_break_hint: bool,
}

fn default_ledger() -> String {
    Config::ledger_file().to_string_lossy().to_string()
}
fn default_show_break_hint() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: default_ledger(),
            responsible_person: String::new(),
            language: Language::default(),
            chart_mode: ChartMode::default(),
            show_break_hint: default_show_break_hint(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("weeklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".weeklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("weeklog.conf")
    }

    /// Return the default path of the JSON ledger
    pub fn ledger_file() -> PathBuf {
        Self::config_dir().join("week.json")
    }

    /// Ledger path with `~/` expanded.
    pub fn ledger_path(&self) -> PathBuf {
        expand_tilde(&self.ledger)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the configuration file (unless in test mode) and return the
    /// ledger path it points to.
    pub fn init_all(custom_ledger: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // Ledger path: user provided or default
        let ledger_path = match custom_ledger {
            Some(name) => expand_tilde(&name),
            None => Self::ledger_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                ledger: ledger_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        Ok(ledger_path)
    }
}
