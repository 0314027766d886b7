//! Unified application error type.
//! All modules (models, core, chart, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Ledger file
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid ledger document: {0}")]
    InvalidDocument(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid day: {0}")]
    InvalidDay(String),

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No activity #{index} on {day}")]
    ActivityNotFound { day: String, index: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
