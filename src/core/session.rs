use crate::core::document::{self, LoadReport};
use crate::errors::AppResult;
use crate::models::WeekLedger;
use std::fs;
use std::path::{Path, PathBuf};

/// The single in-memory ledger of a run, plus the JSON file backing it.
///
/// Handlers receive the session explicitly; nothing is written to disk
/// until `save` is called after a successful mutation.
#[derive(Debug)]
pub struct Session {
    pub ledger: WeekLedger,
    path: PathBuf,
}

impl Session {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            ledger: WeekLedger::new(),
            path: path.into(),
        }
    }

    /// Opens the ledger file; a file that does not exist yet is an empty week.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<(Self, LoadReport)> {
        let mut session = Self::new(path);
        if !session.path.exists() {
            return Ok((session, LoadReport::default()));
        }

        let path = session.path.clone();
        let report = session.load_from(&path)?;
        Ok((session, report))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the ledger with the content of `path`.
    /// On any read or parse error the current ledger is kept as it was.
    pub fn load_from(&mut self, path: &Path) -> AppResult<LoadReport> {
        let content = fs::read_to_string(path)?;
        let (ledger, report) = document::from_json_str(&content)?;
        self.ledger = ledger;
        Ok(report)
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&self.path)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = document::to_json_string(&self.ledger)?;
        fs::write(path, json)?;
        Ok(())
    }
}
