/// Main entry point for the habit streak tracker
///
/// This file sets up logging, parses command line arguments, and dispatches
/// one action against the tracker. Logs go to stderr; stdout carries only
/// the command's output.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{CommandFactory, Parser, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use habit_streaks::{parse_date, Config, HabitId, HabitTracker, RecordOutcome, TrackerError};

/// Actions understood by the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    /// Register a habit (needs --name and --frequency)
    #[value(name = "add")]
    Add,
    /// List every habit
    #[value(name = "list_all")]
    ListAll,
    /// List habits of one frequency (needs --frequency)
    #[value(name = "list_by_frequency")]
    ListByFrequency,
    /// Mark a habit as done today or on --date (needs --id)
    #[value(name = "complete")]
    Complete,
    /// Longest streak of one habit (needs --id)
    #[value(name = "longest_streak_for")]
    LongestStreakFor,
    /// Habit with the longest streak
    #[value(name = "longest_streak_all")]
    LongestStreakAll,
    /// Load deterministic sample data
    #[value(name = "insert_dummy")]
    InsertDummy,
}

/// Command line arguments for the habit streak tracker
#[derive(Parser, Debug)]
#[command(author, version, about = "Track habits and their longest streaks", long_about = None)]
struct Args {
    /// Action to perform
    #[arg(value_enum)]
    action: Action,

    /// Habit name
    #[arg(long)]
    name: Option<String>,

    /// Daily or Weekly
    #[arg(long)]
    frequency: Option<String>,

    /// Habit ID
    #[arg(long)]
    id: Option<i64>,

    /// Completion date as YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = parse_cli_date)]
    date: Option<NaiveDate>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Path to the SQLite database file
    /// Overrides HABIT_TRACKER_DB; defaults to a location in the user's home directory
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

/// Errors that end a command line run
#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Usage(&'static str),

    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

impl CliError {
    /// 2 for a usage error or invalid input, 1 for anything else
    fn exit_status(&self) -> u8 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Tracker(e) if e.is_invalid_input() => 2,
            CliError::Tracker(_) => 1,
        }
    }

    fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

fn parse_cli_date(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

/// Flags an action needs, checked before anything touches the database
fn check_required(args: &Args) -> Result<(), CliError> {
    match args.action {
        Action::Add if args.name.is_none() || args.frequency.is_none() => {
            Err(CliError::Usage("Please provide --name and --frequency."))
        }
        Action::ListByFrequency if args.frequency.is_none() => {
            Err(CliError::Usage("Please provide --frequency Daily or Weekly."))
        }
        Action::Complete | Action::LongestStreakFor if args.id.is_none() => {
            Err(CliError::Usage("Please provide --id."))
        }
        _ => Ok(()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), TrackerError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(args: &Args, config: &Config) -> Result<(), CliError> {
    let tracker = match &args.database {
        Some(path) => HabitTracker::open(path.clone())?,
        None => HabitTracker::from_config(config)?,
    };
    info!("Using database at: {}", tracker.storage().path().display());

    let name = args.name.as_deref().unwrap_or_default();
    let frequency = args.frequency.as_deref();
    let habit_id = args.id.map(HabitId);

    match args.action {
        Action::Add => {
            let id = tracker.register(name, frequency.unwrap_or_default())?;
            if args.json {
                print_json(&serde_json::json!({ "habit_id": id }))?;
            } else {
                println!("Habit added (id {}).", id);
            }
        }
        Action::ListAll | Action::ListByFrequency => {
            let filter = if args.action == Action::ListByFrequency { frequency } else { None };
            let habits = tracker.list(filter)?;
            if args.json {
                print_json(&habits)?;
            } else if filter.is_some() {
                for habit in &habits {
                    println!("{}: {}", habit.id, habit.name);
                }
            } else {
                for habit in &habits {
                    println!("{}: {} ({})", habit.id, habit.name, habit.frequency);
                }
            }
        }
        Action::Complete => {
            let habit_id = habit_id.ok_or(CliError::Usage("Please provide --id."))?;
            let outcome = tracker.record(habit_id, args.date)?;
            if args.json {
                print_json(&serde_json::json!({ "habit_id": habit_id, "outcome": outcome }))?;
            } else {
                match outcome {
                    RecordOutcome::Recorded => println!("Habit marked as completed."),
                    RecordOutcome::AlreadyRecorded => {
                        println!("Habit was already marked as completed for that day.")
                    }
                }
            }
        }
        Action::LongestStreakFor => {
            let habit_id = habit_id.ok_or(CliError::Usage("Please provide --id."))?;
            let streak = tracker.longest_streak_for(habit_id)?;
            if args.json {
                print_json(&serde_json::json!({ "habit_id": habit_id, "longest_streak": streak }))?;
            } else {
                println!("Longest streak for habit {}: {}", habit_id, streak);
            }
        }
        Action::LongestStreakAll => {
            let best = tracker.longest_streak_across_all()?;
            if args.json {
                print_json(&best)?;
            } else {
                match best {
                    Some(best) => println!(
                        "Longest streak: {} (Habit {}: {})",
                        best.length, best.habit_id, best.name
                    ),
                    None => println!("No streaks found."),
                }
            }
        }
        Action::InsertDummy => {
            let report = tracker.insert_dummy()?;
            if args.json {
                print_json(&report)?;
            } else {
                println!(
                    "Dummy data inserted ({} habits, {} new completions).",
                    report.habits.len(),
                    report.completions_added
                );
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Set up logging based on command line flags, falling back to the environment
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        config.log_level.as_str()
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_streaks={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    let result = check_required(&args).and_then(|()| run(&args, &config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            if matches!(e, CliError::Usage(_)) {
                eprintln!("{}", Args::command().render_usage());
            }
            e.exit_code()
        }
    }
}
