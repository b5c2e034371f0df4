/// Storage layer for persisting habit data
///
/// This module handles all database operations using SQLite. It provides
/// a clean interface for storing habits and completions and for reading back
/// the dates a streak is computed from.

pub mod sqlite;
pub mod migrations;

// Re-export the main storage types
pub use sqlite::*;

use thiserror::Error;
use chrono::NaiveDate;
use crate::domain::{Completion, Frequency, Habit, HabitId, HabitRef, NewHabit, RecordOutcome};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: HabitId },

    #[error("Corrupt value '{value}' in column {column}")]
    CorruptRow { column: &'static str, value: String },

    #[error("Migration error: {0}")]
    Migration(String),
}

/// Trait defining the storage interface for habits
///
/// Operations take `&self` and are expected to acquire and release whatever
/// database resources they need within the call.
pub trait HabitStorage {
    /// Insert a habit, or return the id of the existing habit with the same
    /// name and frequency
    fn upsert_habit(&self, habit: &NewHabit) -> Result<HabitId, StorageError>;

    /// Get a habit by ID
    fn get_habit(&self, habit_id: HabitId) -> Result<Habit, StorageError>;

    /// Get the cadence of a habit
    ///
    /// Returns `Ok(None)` when the habit exists but its stored frequency is
    /// not one this build understands.
    fn habit_frequency(&self, habit_id: HabitId) -> Result<Option<Frequency>, StorageError>;

    /// List habits ordered by id, optionally filtered by frequency
    fn list_habits(&self, frequency: Option<Frequency>) -> Result<Vec<Habit>, StorageError>;

    /// List id and name of every habit, ordered by id
    fn list_habit_refs(&self) -> Result<Vec<HabitRef>, StorageError>;

    /// Delete a habit together with its completions
    fn delete_habit(&self, habit_id: HabitId) -> Result<(), StorageError>;

    /// Store a completion unless one already exists for that habit and day
    fn insert_completion(
        &self,
        habit_id: HabitId,
        completed_on: NaiveDate,
    ) -> Result<RecordOutcome, StorageError>;

    /// Get all completions for a habit, oldest first
    fn list_completions(&self, habit_id: HabitId) -> Result<Vec<Completion>, StorageError>;

    /// Get the sorted, distinct completion dates for a habit
    fn completion_dates(&self, habit_id: HabitId) -> Result<Vec<NaiveDate>, StorageError>;
}
