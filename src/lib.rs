/// Public library interface for the habit streak tracker
///
/// This module exports the tracker facade and the public types that the CLI
/// and tests use to register habits, record completions and query streaks.

use std::path::PathBuf;
use chrono::NaiveDate;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod tools;
pub mod config;

// Re-export public modules and types
pub use domain::*;
pub use storage::{HabitStorage, SqliteStorage, StorageError};
pub use tools::SeedReport;
pub use config::{Config, ConfigError};

/// Errors that can occur while running a tracker operation
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Database error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackerError {
    /// Whether the error is caused by bad caller input rather than the store
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TrackerError::Domain(_))
    }

    /// Whether the error refers to a habit id that does not exist
    pub fn is_unknown_habit(&self) -> bool {
        matches!(self, TrackerError::Storage(StorageError::HabitNotFound { .. }))
    }
}

/// Main habit tracker
///
/// The tracker owns the storage handle and exposes every operation. It holds
/// no open connection; each call acquires and releases its own.
pub struct HabitTracker {
    storage: SqliteStorage,
}

impl HabitTracker {
    /// Create a tracker over the database at `db_path`
    ///
    /// This will initialize the SQLite schema if it doesn't already exist.
    pub fn open(db_path: PathBuf) -> Result<Self, TrackerError> {
        tracing::info!("Opening habit tracker with database: {:?}", db_path);

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let storage = SqliteStorage::new(db_path)?;
        Ok(Self { storage })
    }

    /// Create a tracker from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, TrackerError> {
        Self::open(config.resolve_database_path()?)
    }

    /// Register a habit, returning the existing id for a known name and frequency
    pub fn register(&self, name: &str, frequency: &str) -> Result<HabitId, TrackerError> {
        tools::register_habit(&self.storage, name, frequency)
    }

    /// List habits in id order, optionally filtered by frequency
    pub fn list(&self, frequency: Option<&str>) -> Result<Vec<Habit>, TrackerError> {
        tools::list_habits(&self.storage, frequency)
    }

    /// Get a single habit
    pub fn get(&self, habit_id: HabitId) -> Result<Habit, TrackerError> {
        tools::get_habit(&self.storage, habit_id)
    }

    /// Remove a habit and its completions
    pub fn remove(&self, habit_id: HabitId) -> Result<(), TrackerError> {
        tools::remove_habit(&self.storage, habit_id)
    }

    /// Record that a habit was done on `on_date` (today if `None`)
    pub fn record(
        &self,
        habit_id: HabitId,
        on_date: Option<NaiveDate>,
    ) -> Result<RecordOutcome, TrackerError> {
        tools::record_completion(&self.storage, habit_id, on_date)
    }

    /// Stored completions of a habit, oldest first
    pub fn completions(&self, habit_id: HabitId) -> Result<Vec<Completion>, TrackerError> {
        tools::list_completions(&self.storage, habit_id)
    }

    /// Longest streak of one habit
    pub fn longest_streak_for(&self, habit_id: HabitId) -> Result<u32, TrackerError> {
        tools::longest_streak_for(&self.storage, habit_id)
    }

    /// The habit with the longest streak, or `None` if no habit has one
    pub fn longest_streak_across_all(&self) -> Result<Option<BestStreak>, TrackerError> {
        tools::longest_streak_across_all(&self.storage)
    }

    /// Load the deterministic sample habits
    pub fn insert_dummy(&self) -> Result<SeedReport, TrackerError> {
        tools::insert_dummy_data(&self.storage)
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &SqliteStorage {
        &self.storage
    }
}
