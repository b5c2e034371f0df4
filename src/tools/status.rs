/// Tools for querying streaks

use tracing::warn;
use crate::domain::{longest_streak, BestStreak, HabitId};
use crate::storage::HabitStorage;
use crate::TrackerError;

/// Longest streak for one habit, in days or weeks depending on its frequency
///
/// A habit whose stored frequency is not recognised has a streak of 0.
pub fn longest_streak_for<S: HabitStorage>(
    storage: &S,
    habit_id: HabitId,
) -> Result<u32, TrackerError> {
    let frequency = match storage.habit_frequency(habit_id)? {
        Some(frequency) => frequency,
        None => {
            warn!("Habit {} has no recognised frequency, reporting streak 0", habit_id);
            return Ok(0);
        }
    };

    let dates = storage.completion_dates(habit_id)?;
    Ok(longest_streak(frequency, &dates))
}

/// The habit with the longest streak, if any habit has a streak at all
///
/// Habits are scanned in id order and the first habit to reach the maximum
/// keeps it. A habit whose streak can't be computed is logged and skipped;
/// the remaining habits are still compared.
pub fn longest_streak_across_all<S: HabitStorage>(
    storage: &S,
) -> Result<Option<BestStreak>, TrackerError> {
    let habits = storage.list_habit_refs()?;

    let mut best: Option<BestStreak> = None;

    for habit in habits {
        let name = match habit.name {
            Some(name) => name,
            None => {
                warn!("Habit {} has an unreadable name, skipping it", habit.id);
                continue;
            }
        };

        let length = match longest_streak_for(storage, habit.id) {
            Ok(length) => length,
            Err(e) => {
                warn!("Error calculating streak for habit {}: {}", habit.id, e);
                continue;
            }
        };

        let is_better = match &best {
            Some(current) => length > current.length,
            None => length > 0,
        };

        if is_better {
            best = Some(BestStreak {
                habit_id: habit.id,
                name,
                length,
            });
        }
    }

    Ok(best)
}
