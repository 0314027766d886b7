// src/chart/mod.rs

mod pdf;
pub mod plan;
mod text;

pub use pdf::render_pdf;
pub use plan::{ChartOptions, ChartPlan, build_plan};
pub use text::render_text;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How consecutive activities are joined on a day timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Only the activity segments
    #[default]
    Segments,
    /// Vertical connectors where one activity ends exactly as the next starts
    Steps,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartFormat {
    Pdf,
    Text,
}

impl ChartFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartFormat::Pdf => "pdf",
            ChartFormat::Text => "text",
        }
    }
}
