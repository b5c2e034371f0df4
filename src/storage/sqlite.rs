/// SQLite implementation of the habit storage interface
///
/// This module provides the concrete SQLite implementation for storing
/// and retrieving habit data. It handles all SQL queries and data conversion.
///
/// No connection is held between calls: every operation opens its own
/// connection, and writes run inside a transaction that is rolled back if the
/// operation returns early.

use std::path::{Path, PathBuf};
use rusqlite::{params, params_from_iter, Connection};
use chrono::NaiveDate;

use crate::domain::{
    Completion, CompletionId, Frequency, Habit, HabitId, HabitRef, NewHabit, RecordOutcome,
};
use crate::storage::{migrations, HabitStorage, StorageError};

/// SQLite-based storage implementation
///
/// This struct holds the location of the SQLite database and implements
/// all the storage operations defined in the HabitStorage trait.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    db_path: PathBuf,
}

impl SqliteStorage {
    /// Create a new SQLite storage instance
    ///
    /// This opens a connection to run any necessary migrations and releases
    /// it before returning. Later operations each open their own connection.
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        let storage = Self { db_path };

        let mut conn = storage.connect()?;
        migrations::initialize_database(&mut conn)?;

        tracing::info!("SQLite storage initialized at: {:?}", storage.db_path);

        Ok(storage)
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Open a connection for a single operation
    fn connect(&self) -> Result<Connection, StorageError> {
        let conn = Connection::open(&self.db_path)
            .map_err(|e| StorageError::Connection(format!("Failed to open database: {}", e)))?;

        // Needed for ON DELETE CASCADE; the setting is per connection
        conn.execute("PRAGMA foreign_keys = ON", [])
            .map_err(|e| StorageError::Connection(format!("Failed to enable foreign keys: {}", e)))?;

        Ok(conn)
    }

    fn parse_frequency(value: String) -> Result<Frequency, StorageError> {
        value
            .parse::<Frequency>()
            .map_err(|_| StorageError::CorruptRow { column: "frequency", value })
    }

    fn parse_completed_on(value: String) -> Result<NaiveDate, StorageError> {
        NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .map_err(|_| StorageError::CorruptRow { column: "completed_on", value })
    }
}

impl HabitStorage for SqliteStorage {
    /// Insert a habit or return the id of its existing twin
    ///
    /// The no-op update makes RETURNING yield the existing row on conflict.
    fn upsert_habit(&self, habit: &NewHabit) -> Result<HabitId, StorageError> {
        let conn = self.connect()?;

        let id: i64 = conn.query_row(
            "INSERT INTO habits (name, frequency) VALUES (?1, ?2)
             ON CONFLICT (name, frequency) DO UPDATE SET name = excluded.name
             RETURNING id",
            params![habit.name, habit.frequency.as_str()],
            |row| row.get(0),
        )?;

        tracing::debug!("Upserted habit: {} ({}) -> {}", habit.name, habit.frequency, id);
        Ok(HabitId(id))
    }

    /// Get a habit by its ID
    fn get_habit(&self, habit_id: HabitId) -> Result<Habit, StorageError> {
        let conn = self.connect()?;

        let result = conn.query_row(
            "SELECT id, name, frequency FROM habits WHERE id = ?1",
            params![habit_id.get()],
            |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)),
        );

        match result {
            Ok((id, name, frequency)) => {
                Ok(Habit::from_existing(HabitId(id), name, Self::parse_frequency(frequency)?))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                Err(StorageError::HabitNotFound { habit_id })
            }
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// Get the stored cadence of a habit
    fn habit_frequency(&self, habit_id: HabitId) -> Result<Option<Frequency>, StorageError> {
        let conn = self.connect()?;

        let result = conn.query_row(
            "SELECT frequency FROM habits WHERE id = ?1",
            params![habit_id.get()],
            |row| row.get::<_, Option<String>>(0),
        );

        match result {
            Ok(frequency) => Ok(frequency.and_then(|f| f.parse::<Frequency>().ok())),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                Err(StorageError::HabitNotFound { habit_id })
            }
            Err(e) => Err(StorageError::Query(e)),
        }
    }

    /// List habits with optional filtering
    fn list_habits(&self, frequency: Option<Frequency>) -> Result<Vec<Habit>, StorageError> {
        let conn = self.connect()?;

        let mut sql = "SELECT id, name, frequency FROM habits".to_string();
        let mut args: Vec<&'static str> = Vec::new();

        if let Some(frequency) = frequency {
            sql.push_str(" WHERE frequency = ?1");
            args.push(frequency.as_str());
        }

        sql.push_str(" ORDER BY id ASC");

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(args), |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?))
        })?;

        let mut habits = Vec::new();
        for row in rows {
            let (id, name, frequency) = row?;
            habits.push(Habit::from_existing(HabitId(id), name, Self::parse_frequency(frequency)?));
        }

        Ok(habits)
    }

    /// List id and name of every habit
    fn list_habit_refs(&self) -> Result<Vec<HabitRef>, StorageError> {
        let conn = self.connect()?;

        let mut stmt = conn.prepare("SELECT id, name FROM habits ORDER BY id ASC")?;
        let rows = stmt.query_map([], |row| {
            // A name that isn't text is reported per habit, not as a query failure
            let name = row.get_ref(1)?.as_str().ok().map(str::to_string);
            Ok(HabitRef {
                id: HabitId(row.get(0)?),
                name,
            })
        })?;

        let mut refs = Vec::new();
        for habit in rows {
            refs.push(habit?);
        }

        Ok(refs)
    }

    /// Delete a habit; its completions go with it by cascade
    fn delete_habit(&self, habit_id: HabitId) -> Result<(), StorageError> {
        let conn = self.connect()?;

        let rows_affected = conn.execute(
            "DELETE FROM habits WHERE id = ?1",
            params![habit_id.get()],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::HabitNotFound { habit_id });
        }

        tracing::debug!("Deleted habit: {}", habit_id);
        Ok(())
    }

    /// Store a completion for a habit and day
    fn insert_completion(
        &self,
        habit_id: HabitId,
        completed_on: NaiveDate,
    ) -> Result<RecordOutcome, StorageError> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let exists: bool = tx.query_row(
            "SELECT EXISTS (SELECT 1 FROM habits WHERE id = ?1)",
            params![habit_id.get()],
            |row| row.get(0),
        )?;

        if !exists {
            return Err(StorageError::HabitNotFound { habit_id });
        }

        let inserted = tx.execute(
            "INSERT INTO completions (habit_id, completed_on) VALUES (?1, ?2)
             ON CONFLICT (habit_id, completed_on) DO NOTHING",
            params![habit_id.get(), completed_on],
        )?;

        tx.commit()?;

        if inserted == 0 {
            tracing::debug!("Habit {} already completed on {}", habit_id, completed_on);
            Ok(RecordOutcome::AlreadyRecorded)
        } else {
            tracing::debug!("Recorded completion for habit {} on {}", habit_id, completed_on);
            Ok(RecordOutcome::Recorded)
        }
    }

    /// Get completions for a specific habit
    fn list_completions(&self, habit_id: HabitId) -> Result<Vec<Completion>, StorageError> {
        let conn = self.connect()?;

        let mut stmt = conn.prepare(
            "SELECT id, habit_id, completed_on FROM completions
             WHERE habit_id = ?1
             ORDER BY completed_on ASC, id ASC"
        )?;

        let rows = stmt.query_map(params![habit_id.get()], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?, row.get::<_, String>(2)?))
        })?;

        let mut completions = Vec::new();
        for row in rows {
            let (id, owner, completed_on) = row?;
            completions.push(Completion::from_existing(
                CompletionId(id),
                HabitId(owner),
                Self::parse_completed_on(completed_on)?,
            ));
        }

        Ok(completions)
    }

    /// Get the distinct completion dates for a habit, oldest first
    fn completion_dates(&self, habit_id: HabitId) -> Result<Vec<NaiveDate>, StorageError> {
        let conn = self.connect()?;

        let mut stmt = conn.prepare(
            "SELECT DISTINCT completed_on FROM completions
             WHERE habit_id = ?1
             ORDER BY completed_on ASC"
        )?;

        let rows = stmt.query_map(params![habit_id.get()], |row| row.get::<_, String>(0))?;

        let mut dates = Vec::new();
        for row in rows {
            dates.push(Self::parse_completed_on(row?)?);
        }

        Ok(dates)
    }
}
