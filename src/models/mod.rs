pub mod activity;
pub mod activity_type;
pub mod day_entry;
pub mod day_summary;
pub mod ledger;
pub mod week_key;
pub mod week_meta;

pub use activity::ActivityRecord;
pub use activity_type::ActivityType;
pub use day_entry::DayEntry;
pub use ledger::WeekLedger;
pub use week_key::WeekKey;
pub use week_meta::WeekMeta;
