/// Habit entity and related functionality
///
/// This module defines the Habit struct that represents something the user
/// wants to do regularly, plus the validated input used to register one.

use serde::{Deserialize, Serialize};
use crate::domain::{DomainError, Frequency, HabitId};

/// Longest accepted habit name, in characters
pub const MAX_NAME_LEN: usize = 100;

/// A habit as stored in the database
///
/// Habits are never mutated after registration. The id is assigned by the
/// store when the habit is first inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read 10 Pages")
    pub name: String,
    /// How often this habit should be performed
    pub frequency: Frequency,
}

impl Habit {
    /// Create a habit from existing data (used when loading from database)
    pub fn from_existing(id: HabitId, name: String, frequency: Frequency) -> Self {
        Self { id, name, frequency }
    }
}

/// Id and name of a habit, without its cadence
///
/// The global streak scan enumerates habits through this projection so that
/// one row with an unreadable name or frequency can be skipped on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HabitRef {
    pub id: HabitId,
    /// `None` when the stored name is not text
    pub name: Option<String>,
}

/// Validated input for registering a habit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHabit {
    pub name: String,
    pub frequency: Frequency,
}

impl NewHabit {
    /// Validate raw user input
    ///
    /// The name is trimmed and must be non-empty; the frequency must be
    /// `Daily` or `Weekly` in any letter case.
    pub fn new(name: &str, frequency: &str) -> Result<Self, DomainError> {
        let frequency = frequency.parse::<Frequency>()?;
        let name = Self::validate_name(name)?;
        Ok(Self { name, frequency })
    }

    fn validate_name(name: &str) -> Result<String, DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::InvalidHabitName(
                format!("Habit name cannot be longer than {} characters", MAX_NAME_LEN)
            ));
        }

        Ok(trimmed.to_string())
    }
}
