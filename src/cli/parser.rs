use crate::chart::{ChartFormat, ChartMode};
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for weeklog
/// CLI application to log a driver's week of activities in a JSON ledger
#[derive(Parser)]
#[command(
    name = "weeklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A weekly driver logbook: log driving (F), breaks (P) and work (A), sum working hours and draw daily timelines",
    long_about = None
)]
pub struct Cli {
    /// Override ledger file path (useful for tests or a second week)
    #[arg(global = true, long = "ledger")]
    pub ledger: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty ledger
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add an activity to a day
    Add {
        /// Day (Monday..Sunday, Montag..Sonntag or 1..7)
        day: String,

        /// Activity type: F = driving, P = break, A = work
        kind: String,

        /// Start, in hours of the day (e.g. 7.5 or 7,5)
        #[arg(allow_hyphen_values = true)]
        start: String,

        /// End, in hours of the day
        #[arg(allow_hyphen_values = true)]
        end: String,

        #[arg(long, short, help = "Optional note shown above the segment")]
        note: Option<String>,
    },

    /// Delete one activity, or clear a whole day
    Del {
        day: String,

        #[arg(long = "index", help = "Activity number as shown by `list` (1-based)")]
        index: Option<usize>,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Set the declared total hours and/or km of a day
    Set {
        day: String,

        #[arg(long = "hours", help = "Declared total hours (may include breaks)")]
        hours: Option<String>,

        #[arg(long = "km", help = "Kilometers driven")]
        km: Option<String>,
    },

    /// List the logged activities (all days or one day)
    List { day: Option<String> },

    /// Compute working hours (breaks excluded) for a day or the whole week
    Hours { day: Option<String> },

    /// Print the collected ledger as JSON
    Show,

    /// Remove all data of the week
    Clear {
        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Replace the ledger with the content of a JSON file
    Import {
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Export the ledger
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Draw the week as one timeline per day
    Chart {
        #[arg(long, value_enum, default_value = "text")]
        format: ChartFormat,

        #[arg(long, value_enum, help = "segments or steps (default from config)")]
        mode: Option<ChartMode>,

        #[arg(long, value_name = "FILE", help = "Output file (required for pdf)")]
        file: Option<String>,

        #[arg(
            long = "week-of",
            value_name = "DATE",
            help = "Any date of the week (YYYY-MM-DD): fills date range and week number"
        )]
        week_of: Option<String>,

        #[arg(long, help = "Responsible person shown in the heading")]
        person: Option<String>,

        #[arg(long = "date-range", help = "Free text date range for the heading")]
        date_range: Option<String>,

        #[arg(long, help = "Week number for the heading")]
        week: Option<u32>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
