/// End-to-end tracker workflows against a temporary database
use chrono::{Duration, NaiveDate};
use habit_streaks::*;
use rusqlite::{params, Connection};
use tempfile::NamedTempFile;

fn tracker() -> (NamedTempFile, HabitTracker) {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let tracker = HabitTracker::open(temp_file.path().to_path_buf())
        .expect("Failed to create tracker");
    (temp_file, tracker)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record_days(tracker: &HabitTracker, id: HabitId, start: NaiveDate, count: i64) {
    for offset in 0..count {
        tracker.record(id, Some(start + Duration::days(offset))).unwrap();
    }
}

#[cfg(test)]
mod tracker_workflow_tests {
    use super::*;

    #[test]
    fn test_add_and_list_habit() {
        let (_file, tracker) = tracker();

        let id = tracker.register("Test Habit", "Daily").unwrap();

        let habits = tracker.list(None).unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].id, id);
        assert_eq!(habits[0].name, "Test Habit");
        assert_eq!(habits[0].frequency, Frequency::Daily);
    }

    #[test]
    fn test_register_rejects_invalid_frequency_without_writing() {
        let (_file, tracker) = tracker();

        let err = tracker.register("X", "Biweekly").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(err, TrackerError::Domain(DomainError::InvalidFrequency(_))));
        assert!(tracker.list(None).unwrap().is_empty());
    }

    #[test]
    fn test_register_same_habit_twice_upserts() {
        let (_file, tracker) = tracker();

        let first = tracker.register("Stretch", "Weekly").unwrap();
        let second = tracker.register("Stretch", "weekly").unwrap();

        assert_eq!(first, second);
        assert_eq!(tracker.list(None).unwrap().len(), 1);
    }

    #[test]
    fn test_list_by_frequency() {
        let (_file, tracker) = tracker();

        tracker.register("Run", "Daily").unwrap();
        let gym = tracker.register("Gym", "Weekly").unwrap();
        tracker.register("Read", "Daily").unwrap();

        let weekly = tracker.list(Some("Weekly")).unwrap();
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].id, gym);

        let daily: Vec<String> = tracker
            .list(Some("Daily"))
            .unwrap()
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(daily, vec!["Run".to_string(), "Read".to_string()]);

        assert!(tracker.list(Some("Monthly")).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_mark_completed_today() {
        let (_file, tracker) = tracker();
        let id = tracker.register("Water", "Daily").unwrap();

        assert_eq!(tracker.record(id, None).unwrap(), RecordOutcome::Recorded);

        let completions = tracker.completions(id).unwrap();
        assert_eq!(completions.len(), 1);
        assert_eq!(completions[0].completed_on, chrono::Local::now().date_naive());
    }

    #[test]
    fn test_duplicate_completion_stores_one_row() {
        let (_file, tracker) = tracker();
        let id = tracker.register("Water", "Daily").unwrap();
        let day = date(2025, 10, 1);

        assert_eq!(tracker.record(id, Some(day)).unwrap(), RecordOutcome::Recorded);
        assert_eq!(tracker.record(id, Some(day)).unwrap(), RecordOutcome::AlreadyRecorded);
        assert_eq!(tracker.completions(id).unwrap().len(), 1);
        assert_eq!(tracker.longest_streak_for(id).unwrap(), 1);
    }

    #[test]
    fn test_complete_unknown_habit() {
        let (_file, tracker) = tracker();

        let err = tracker.record(HabitId(99), None).unwrap_err();
        assert!(err.is_unknown_habit());
    }

    #[test]
    fn test_future_completion_rejected() {
        let (_file, tracker) = tracker();
        let id = tracker.register("Water", "Daily").unwrap();
        let tomorrow = chrono::Local::now().date_naive() + Duration::days(1);

        let err = tracker.record(id, Some(tomorrow)).unwrap_err();
        assert!(matches!(err, TrackerError::Domain(DomainError::InvalidDate(_))));
    }

    #[test]
    fn test_longest_streak_for_daily() {
        let (_file, tracker) = tracker();
        let id = tracker.register("Meditate", "Daily").unwrap();

        record_days(&tracker, id, date(2025, 9, 1), 5);

        assert_eq!(tracker.longest_streak_for(id).unwrap(), 5);
    }

    #[test]
    fn test_longest_streak_for_weekly() {
        let (_file, tracker) = tracker();
        let id = tracker.register("Gym", "Weekly").unwrap();

        // Three consecutive Mondays
        for week in 0..3 {
            tracker.record(id, Some(date(2025, 9, 8) + Duration::weeks(week))).unwrap();
        }

        assert_eq!(tracker.longest_streak_for(id).unwrap(), 3);
    }

    #[test]
    fn test_longest_streak_for_no_completions() {
        let (_file, tracker) = tracker();
        let id = tracker.register("Floss", "Daily").unwrap();

        assert_eq!(tracker.longest_streak_for(id).unwrap(), 0);
    }

    #[test]
    fn test_longest_streak_for_unknown_habit() {
        let (_file, tracker) = tracker();

        assert!(tracker.longest_streak_for(HabitId(5)).unwrap_err().is_unknown_habit());
    }

    #[test]
    fn test_longest_streak_all() {
        let (_file, tracker) = tracker();
        let a = tracker.register("A", "Daily").unwrap();
        let b = tracker.register("B", "Daily").unwrap();

        record_days(&tracker, a, date(2025, 9, 1), 2);
        record_days(&tracker, b, date(2025, 9, 1), 4);

        let best = tracker.longest_streak_across_all().unwrap();
        assert_eq!(
            best,
            Some(BestStreak {
                habit_id: b,
                name: "B".to_string(),
                length: 4,
            })
        );
    }

    #[test]
    fn test_longest_streak_all_without_habits() {
        let (_file, tracker) = tracker();

        assert_eq!(tracker.longest_streak_across_all().unwrap(), None);
    }

    #[test]
    fn test_longest_streak_all_tie_keeps_first() {
        let (_file, tracker) = tracker();
        let first = tracker.register("First", "Daily").unwrap();
        let second = tracker.register("Second", "Weekly").unwrap();

        record_days(&tracker, first, date(2025, 9, 1), 3);
        for week in 0..3 {
            tracker.record(second, Some(date(2025, 9, 3) + Duration::weeks(week))).unwrap();
        }

        let best = tracker.longest_streak_across_all().unwrap().unwrap();
        assert_eq!(best.habit_id, first);
        assert_eq!(best.length, 3);
    }

    #[test]
    fn test_longest_streak_all_skips_corrupt_habit() {
        let (file, tracker) = tracker();
        let broken = tracker.register("Broken", "Daily").unwrap();
        let healthy = tracker.register("Healthy", "Daily").unwrap();

        record_days(&tracker, broken, date(2025, 9, 1), 6);
        record_days(&tracker, healthy, date(2025, 9, 1), 3);

        let conn = Connection::open(file.path()).unwrap();
        conn.execute(
            "INSERT INTO completions (habit_id, completed_on) VALUES (?1, 'garbage')",
            params![broken.get()],
        )
        .unwrap();

        assert!(tracker.longest_streak_for(broken).is_err());

        let best = tracker.longest_streak_across_all().unwrap().unwrap();
        assert_eq!(best.habit_id, healthy);
        assert_eq!(best.length, 3);
    }

    #[test]
    fn test_longest_streak_all_skips_habit_with_binary_name() {
        let (file, tracker) = tracker();
        let good = tracker.register("Good", "Daily").unwrap();
        tracker.record(good, Some(date(2025, 9, 1))).unwrap();

        let conn = Connection::open(file.path()).unwrap();
        conn.execute("INSERT INTO habits (name, frequency) VALUES (X'41', 'Daily')", [])
            .unwrap();

        let best = tracker.longest_streak_across_all().unwrap().unwrap();
        assert_eq!(best.habit_id, good);
        assert_eq!(best.name, "Good");
        assert_eq!(best.length, 1);
    }

    #[test]
    fn test_unknown_stored_frequency_has_no_streak() {
        let (file, tracker) = tracker();
        let good = tracker.register("Good", "Daily").unwrap();
        let odd = tracker.register("Odd", "Daily").unwrap();

        tracker.record(good, Some(date(2025, 9, 1))).unwrap();
        record_days(&tracker, odd, date(2025, 9, 1), 4);

        let conn = Connection::open(file.path()).unwrap();
        conn.execute_batch("PRAGMA ignore_check_constraints = ON;").unwrap();
        conn.execute(
            "UPDATE habits SET frequency = 'Monthly' WHERE id = ?1",
            params![odd.get()],
        )
        .unwrap();

        assert_eq!(tracker.longest_streak_for(odd).unwrap(), 0);

        let best = tracker.longest_streak_across_all().unwrap().unwrap();
        assert_eq!(best.habit_id, good);
        assert_eq!(best.length, 1);
    }

    #[test]
    fn test_completion_outside_supported_years_rejected() {
        let (_file, tracker) = tracker();
        let id = tracker.register("Stretch", "Weekly").unwrap();

        for day in [NaiveDate::MIN, date(0, 12, 31)] {
            let err = tracker.record(id, Some(day)).unwrap_err();
            assert!(err.is_invalid_input());
            assert!(matches!(err, TrackerError::Domain(DomainError::InvalidDate(_))));
        }

        assert!(tracker.completions(id).unwrap().is_empty());
        assert_eq!(tracker.longest_streak_for(id).unwrap(), 0);
        assert!(tracker.longest_streak_across_all().unwrap().is_none());
    }

    #[test]
    fn test_remove_habit_cascades() {
        let (_file, tracker) = tracker();
        let id = tracker.register("Temporary", "Daily").unwrap();
        record_days(&tracker, id, date(2025, 9, 1), 3);

        tracker.remove(id).unwrap();

        assert!(tracker.get(id).unwrap_err().is_unknown_habit());
        assert!(tracker.completions(id).unwrap_err().is_unknown_habit());
        assert_eq!(tracker.longest_streak_across_all().unwrap(), None);
    }

    #[test]
    fn test_database_persistence() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let id = {
            let tracker = HabitTracker::open(db_path.clone()).unwrap();
            let id = tracker.register("Persisted", "Weekly").unwrap();
            tracker.record(id, Some(date(2025, 9, 1))).unwrap();
            id
        };

        let reopened = HabitTracker::open(db_path.clone()).unwrap();
        assert_eq!(reopened.storage().path(), db_path.as_path());
        let habit = reopened.get(id).unwrap();
        assert_eq!(habit.name, "Persisted");
        assert_eq!(reopened.longest_streak_for(id).unwrap(), 1);
    }
}
