/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, Completion) and the streak
/// engine that reduces completion dates to run lengths. These types carry no
/// storage concerns and can be tested in isolation.

pub mod habit;
pub mod completion;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use completion::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid frequency '{0}': expected Daily or Weekly")]
    InvalidFrequency(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}
