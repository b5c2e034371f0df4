/// Streak calculation functionality
///
/// A streak is the number of consecutive calendar units (days or weeks) in
/// which a habit has at least one completion. The longest streak is found by
/// gap detection: after sorting and deduplicating the units, every unit at
/// position `i` gets the group key `unit - i * step`. Units that belong to
/// the same unbroken run advance by exactly one step per position and so
/// share a key; the longest streak is the size of the largest group.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use chrono::{Datelike, NaiveDate};
use crate::domain::{Frequency, HabitId};

/// The habit holding the longest streak among all habits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestStreak {
    pub habit_id: HabitId,
    pub name: String,
    pub length: u32,
}

/// Longest streak for a habit of the given frequency
///
/// `dates` may be in any order and may contain duplicates. Weekly habits
/// first collapse each date onto its Monday week-start, so two completions in
/// the same week count once.
pub fn longest_streak(frequency: Frequency, dates: &[NaiveDate]) -> u32 {
    let units: Vec<NaiveDate> = dates.iter().map(|d| frequency.unit_start(*d)).collect();
    longest_run(&units, frequency.step_days())
}

/// Size of the largest run of units spaced exactly `step_days` apart
///
/// Every unit must already be aligned to the step (any date for a 1-day step,
/// week-starts for a 7-day step); otherwise unrelated units can collide on
/// the same group key.
pub fn longest_run(units: &[NaiveDate], step_days: i64) -> u32 {
    let distinct: BTreeSet<NaiveDate> = units.iter().copied().collect();

    // Keys are day numbers, so they stay valid at the ends of the date range
    let mut groups: HashMap<i64, u32> = HashMap::new();
    for (position, unit) in distinct.iter().enumerate() {
        let key = unit.num_days_from_ce() as i64 - position as i64 * step_days;
        *groups.entry(key).or_insert(0) += 1;
    }

    groups.into_values().max().unwrap_or(0)
}
