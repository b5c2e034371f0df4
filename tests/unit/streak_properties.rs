/// Streak engine properties checked through the public API
use chrono::{Duration, NaiveDate};
use habit_streaks::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Straightforward reference: walk sorted distinct dates and count runs
fn reference_daily_streak(dates: &[NaiveDate]) -> u32 {
    let mut sorted = dates.to_vec();
    sorted.sort();
    sorted.dedup();

    let mut best = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;
    for d in sorted {
        current = match previous {
            Some(p) if d - p == Duration::days(1) => current + 1,
            _ => 1,
        };
        best = best.max(current);
        previous = Some(d);
    }
    best
}

#[cfg(test)]
mod streak_property_tests {
    use super::*;

    #[test]
    fn test_daily_matches_reference_on_bit_patterns() {
        // Every subset of a 10-day window, encoded as a bit mask
        let start = date(2025, 12, 26);
        for mask in 0u32..(1 << 10) {
            let dates: Vec<NaiveDate> = (0..10)
                .filter(|bit| mask & (1 << bit) != 0)
                .map(|bit| start + Duration::days(bit as i64))
                .collect();

            assert_eq!(
                longest_streak(Frequency::Daily, &dates),
                reference_daily_streak(&dates),
                "mask {:010b}",
                mask
            );
        }
    }

    #[test]
    fn test_empty_and_single_date() {
        assert_eq!(longest_streak(Frequency::Daily, &[]), 0);
        assert_eq!(longest_streak(Frequency::Daily, &[date(2024, 2, 29)]), 1);
        assert_eq!(longest_streak(Frequency::Weekly, &[date(2024, 2, 29)]), 1);
    }

    #[test]
    fn test_weekly_invariant_to_day_of_week() {
        let mon_wed = longest_streak(Frequency::Weekly, &[date(2025, 9, 22), date(2025, 9, 24)]);
        let tue = longest_streak(Frequency::Weekly, &[date(2025, 9, 23)]);
        assert_eq!(mon_wed, tue);
    }

    #[test]
    fn test_weekly_across_year_boundary() {
        // Weeks starting 2025-12-22, 2025-12-29 and 2026-01-05
        let dates = [date(2025, 12, 24), date(2026, 1, 1), date(2026, 1, 10)];
        assert_eq!(longest_streak(Frequency::Weekly, &dates), 3);
    }

    #[test]
    fn test_week_start() {
        assert_eq!(week_start(date(2025, 10, 19)), date(2025, 10, 13));
    }
}
