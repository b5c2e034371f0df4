/// Tools for registering and removing habits

use crate::domain::{HabitId, NewHabit};
use crate::storage::HabitStorage;
use crate::TrackerError;

/// Register a habit and return its id
///
/// Input is validated before the store is touched. Registering a name and
/// frequency that already exist returns the existing habit's id instead of
/// creating a second row.
pub fn register_habit<S: HabitStorage>(
    storage: &S,
    name: &str,
    frequency: &str,
) -> Result<HabitId, TrackerError> {
    let habit = NewHabit::new(name, frequency)?;

    let habit_id = storage.upsert_habit(&habit)?;

    tracing::info!("Registered habit '{}' ({}) as {}", habit.name, habit.frequency, habit_id);
    Ok(habit_id)
}

/// Remove a habit and every completion recorded for it
pub fn remove_habit<S: HabitStorage>(storage: &S, habit_id: HabitId) -> Result<(), TrackerError> {
    storage.delete_habit(habit_id)?;

    tracing::info!("Removed habit {}", habit_id);
    Ok(())
}
