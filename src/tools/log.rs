/// Tool for recording habit completions

use chrono::{Local, NaiveDate};
use crate::domain::{is_supported_date, Completion, DomainError, HabitId, RecordOutcome};
use crate::storage::HabitStorage;
use crate::TrackerError;

/// Today's date in the local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Mark a habit as done on `on_date`, or today when no date is given
///
/// Recording the same habit twice for one day is not an error; the second
/// call reports `AlreadyRecorded` and stores nothing.
pub fn record_completion<S: HabitStorage>(
    storage: &S,
    habit_id: HabitId,
    on_date: Option<NaiveDate>,
) -> Result<RecordOutcome, TrackerError> {
    let today = today();
    let completed_on = on_date.unwrap_or(today);

    if completed_on > today {
        return Err(DomainError::InvalidDate(format!(
            "{} is in the future",
            completed_on
        ))
        .into());
    }

    if !is_supported_date(completed_on) {
        return Err(DomainError::InvalidDate(format!(
            "{} is outside years 1 to 9999",
            completed_on
        ))
        .into());
    }

    let outcome = storage.insert_completion(habit_id, completed_on)?;

    if outcome == RecordOutcome::AlreadyRecorded {
        tracing::info!("Habit {} was already completed on {}", habit_id, completed_on);
    }

    Ok(outcome)
}

/// All completions stored for a habit, oldest first
pub fn list_completions<S: HabitStorage>(
    storage: &S,
    habit_id: HabitId,
) -> Result<Vec<Completion>, TrackerError> {
    // Distinguish "no completions" from "no such habit"
    storage.get_habit(habit_id)?;

    Ok(storage.list_completions(habit_id)?)
}
