use crate::core::calculator::hours;
use crate::core::input;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::WeekKey;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::fmt_hours;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Parses the row and appends it to the day. Returns the new day total.
    /// A row with a non-numeric start/end leaves the session untouched.
    pub fn apply(
        session: &mut Session,
        day: WeekKey,
        kind: &str,
        start: &str,
        end: &str,
        note: Option<&str>,
    ) -> AppResult<f64> {
        let record = input::parse_activity(kind, start, end, note)?;
        if !record.kind.is_known() {
            warning(format!(
                "Unknown activity type '{}': kept, but drawn in gray",
                record.kind.code()
            ));
        }
        let label = format!(
            "{} {}-{}",
            record.kind.code(),
            fmt_hours(record.start),
            fmt_hours(record.end)
        );

        session.ledger.add_activity(day, record);
        let total = hours::compute_day_working_hours(&session.ledger, day);

        success(format!("Added {} on {}", label, day));
        Ok(total)
    }

    /// Updates the declared totals. Unparsable values count as 0.
    pub fn set_totals(
        session: &mut Session,
        day: WeekKey,
        total_hours: Option<&str>,
        km: Option<&str>,
    ) {
        let h = total_hours.map(input::parse_lenient);
        let k = km.map(input::parse_lenient);
        session.ledger.set_totals(day, h, k);
    }
}
