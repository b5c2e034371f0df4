/// Tool for loading deterministic sample data
///
/// The sample covers five habits over September and October 2025. Seeding
/// goes through the same upsert and insert-or-ignore paths as normal use, so
/// running it again leaves the database unchanged.

use serde::Serialize;
use chrono::{Duration, NaiveDate};
use crate::domain::{HabitId, NewHabit, RecordOutcome};
use crate::storage::HabitStorage;
use crate::TrackerError;

/// What a seeding run changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Ids of the sample habits, in seeding order
    pub habits: Vec<HabitId>,
    /// Number of completion rows that did not exist before
    pub completions_added: usize,
}

/// One sample habit and the days it was completed
struct SampleHabit {
    name: &'static str,
    frequency: &'static str,
    dates: Vec<NaiveDate>,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn days_from(start: NaiveDate, count: i64) -> Vec<NaiveDate> {
    (0..count).map(|offset| start + Duration::days(offset)).collect()
}

fn sample_habits() -> Vec<SampleHabit> {
    let mut journal = days_from(ymd(2025, 9, 22), 14);
    journal.extend(days_from(ymd(2025, 10, 13), 7));

    vec![
        SampleHabit {
            name: "Morning Meditation",
            frequency: "Daily",
            dates: days_from(ymd(2025, 9, 22), 28),
        },
        SampleHabit {
            name: "Weekly Gym Session",
            frequency: "Weekly",
            dates: vec![ymd(2025, 9, 23), ymd(2025, 9, 30), ymd(2025, 10, 7), ymd(2025, 10, 14)],
        },
        SampleHabit {
            name: "Read 10 Pages",
            frequency: "Daily",
            dates: vec![
                ymd(2025, 9, 22), ymd(2025, 9, 23), ymd(2025, 9, 25), ymd(2025, 9, 27),
                ymd(2025, 9, 30), ymd(2025, 10, 1), ymd(2025, 10, 3), ymd(2025, 10, 5),
                ymd(2025, 10, 8), ymd(2025, 10, 10), ymd(2025, 10, 12), ymd(2025, 10, 14),
                ymd(2025, 10, 17), ymd(2025, 10, 19),
            ],
        },
        SampleHabit {
            name: "Sunday Meal Prep",
            frequency: "Weekly",
            dates: vec![ymd(2025, 9, 28), ymd(2025, 10, 5), ymd(2025, 10, 12), ymd(2025, 10, 19)],
        },
        SampleHabit {
            name: "Write Journal Entry",
            frequency: "Daily",
            dates: journal,
        },
    ]
}

/// Insert the sample habits and their completions
pub fn insert_dummy_data<S: HabitStorage>(storage: &S) -> Result<SeedReport, TrackerError> {
    let mut report = SeedReport {
        habits: Vec::new(),
        completions_added: 0,
    };

    for sample in sample_habits() {
        let habit = NewHabit::new(sample.name, sample.frequency)?;
        let habit_id = storage.upsert_habit(&habit)?;

        for date in sample.dates {
            if storage.insert_completion(habit_id, date)? == RecordOutcome::Recorded {
                report.completions_added += 1;
            }
        }

        report.habits.push(habit_id);
    }

    tracing::info!(
        "Seeded {} habits, {} new completions",
        report.habits.len(),
        report.completions_added
    );
    Ok(report)
}
