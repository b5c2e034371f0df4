/// Core types and enums used throughout the domain layer
///
/// This module defines the ID wrappers and the Frequency enum that are used
/// by Habit, Completion and the streak engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::DomainError;

/// Unique identifier for a habit
///
/// This wraps the row id assigned by the database so a habit id can't be
/// passed where a completion id is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub i64);

impl HabitId {
    /// Get the raw row id
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for HabitId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Unique identifier for a completion record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionId(pub i64);

impl fmt::Display for CompletionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How often a habit should be performed
///
/// The frequency decides the calendar unit streaks are counted in: a daily
/// habit is measured in consecutive days, a weekly habit in consecutive weeks
/// with at least one completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    /// Every single day
    Daily,
    /// At least once per Monday-aligned week
    Weekly,
}

impl Frequency {
    /// Canonical name, as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
        }
    }

    /// Length of one streak unit in days
    pub fn step_days(&self) -> i64 {
        match self {
            Frequency::Daily => 1,
            Frequency::Weekly => 7,
        }
    }

    /// Map a date onto the first day of the unit that contains it
    ///
    /// Daily units are the date itself; weekly units start on Monday.
    pub fn unit_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Daily => date,
            Frequency::Weekly => week_start(date),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = DomainError;

    /// Parse user input, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            _ => Err(DomainError::InvalidFrequency(s.to_string())),
        }
    }
}

/// Earliest year a completion may be recorded in
pub const MIN_YEAR: i32 = 1;

/// Latest year a completion may be recorded in
pub const MAX_YEAR: i32 = 9999;

/// Monday of the week containing `date`
///
/// Clamped to the earliest representable date.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = Duration::days(date.weekday().num_days_from_monday() as i64);
    date.checked_sub_signed(offset).unwrap_or(NaiveDate::MIN)
}

/// Whether `date` falls in the years the tracker stores
pub fn is_supported_date(date: NaiveDate) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&date.year())
}

/// Parse a `YYYY-MM-DD` calendar date between years 1 and 9999
pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .filter(|date| is_supported_date(*date))
        .ok_or_else(|| DomainError::InvalidDate(s.to_string()))
}
