/// Completion entity for tracking when a habit was done
///
/// A completion records that a habit was performed on one calendar day.
/// There is at most one completion per habit and day.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{CompletionId, HabitId};

/// A record of completing a habit on a specific day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Unique identifier for this completion
    pub id: CompletionId,
    /// Which habit this completion is for
    pub habit_id: HabitId,
    /// Which day the habit was done
    pub completed_on: NaiveDate,
}

impl Completion {
    /// Create a completion from existing data (used when loading from database)
    pub fn from_existing(id: CompletionId, habit_id: HabitId, completed_on: NaiveDate) -> Self {
        Self { id, habit_id, completed_on }
    }
}

/// What happened when a completion was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOutcome {
    /// A new completion row was stored
    Recorded,
    /// The habit was already marked done for that day; nothing changed
    AlreadyRecorded,
}
