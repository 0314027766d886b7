use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityRecord, WeekKey};
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// `index` is 1-based, as shown by `list`. Without an index the whole
    /// day is reset.
    pub fn apply(
        session: &mut Session,
        day: WeekKey,
        index: Option<usize>,
    ) -> AppResult<Option<ActivityRecord>> {
        if let Some(i) = index {
            let removed = i
                .checked_sub(1)
                .and_then(|idx| session.ledger.remove_activity(day, idx))
                .ok_or_else(|| AppError::ActivityNotFound {
                    day: day.to_string(),
                    index: i,
                })?;

            info(format!("Deleted activity #{} for {}", i, day));
            return Ok(Some(removed));
        }

        session.ledger.clear_day(day);
        info(format!("Cleared all data for {}", day));
        Ok(None)
    }

    pub fn clear_all(session: &mut Session) {
        session.ledger.clear();
        info("Cleared all data for the week");
    }
}
