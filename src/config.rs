/// Runtime configuration
///
/// Settings come from environment variables with defaults; command line flags
/// can override them afterwards.
///
/// - `HABIT_TRACKER_DB`: path to the SQLite database file
/// - `HABIT_TRACKER_LOG`: log level (`error`, `warn`, `info`, `debug`, `trace`)

use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming the database file
pub const DATABASE_ENV: &str = "HABIT_TRACKER_DB";

/// Environment variable naming the log level
pub const LOG_LEVEL_ENV: &str = "HABIT_TRACKER_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {var}")]
    InvalidValue { var: String, value: String },

    #[error("No writable location for the database: {0}")]
    NoDatabaseLocation(#[from] std::io::Error),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the SQLite database file, if one was configured
    pub database_path: Option<PathBuf>,
    /// Log level for this crate's output
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration using `lookup` to read variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_ENV) {
            Some(level) => parse_log_level(&level)?,
            None => DEFAULT_LOG_LEVEL.to_string(),
        };

        let database_path = lookup(DATABASE_ENV)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            database_path,
            log_level,
        })
    }

    /// The configured database path, or the default location
    ///
    /// The default is only looked up here, since finding it creates a directory.
    pub fn resolve_database_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => default_database_path(),
        }
    }
}

fn parse_log_level(value: &str) -> Result<String, ConfigError> {
    let level = value.trim().to_lowercase();
    if LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(ConfigError::InvalidValue {
            var: LOG_LEVEL_ENV.to_string(),
            value: value.to_string(),
        })
    }
}

/// Get the default database path with a fallback strategy
///
/// Candidates are tried in order and the first directory that can be created
/// and written to wins. The temp directory is the last resort.
pub fn default_database_path() -> Result<PathBuf, ConfigError> {
    let potential_paths = [
        dirs::home_dir().map(|p| p.join(".habit_tracker")),
        dirs::data_dir().map(|p| p.join("habit_tracker")),
        dirs::config_dir().map(|p| p.join("habit_tracker")),
        std::env::current_dir().ok().map(|p| p.join(".habit_tracker")),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                return Ok(potential_path.join("habits.db"));
            }
        }
    }

    let temp_path = std::env::temp_dir().join("habit_tracker");
    std::fs::create_dir_all(&temp_path)?;

    tracing::warn!("Using temporary directory for database: {}", temp_path.display());
    Ok(temp_path.join("habits.db"))
}
