/// Tools for looking up habits

use crate::domain::{Frequency, Habit, HabitId};
use crate::storage::HabitStorage;
use crate::TrackerError;

/// List habits in registration order, optionally only those of one frequency
///
/// The filter is raw user input and is validated like a registration
/// frequency.
pub fn list_habits<S: HabitStorage>(
    storage: &S,
    frequency: Option<&str>,
) -> Result<Vec<Habit>, TrackerError> {
    let filter = frequency.map(str::parse::<Frequency>).transpose()?;

    Ok(storage.list_habits(filter)?)
}

/// Get a single habit
pub fn get_habit<S: HabitStorage>(storage: &S, habit_id: HabitId) -> Result<Habit, TrackerError> {
    Ok(storage.get_habit(habit_id)?)
}
