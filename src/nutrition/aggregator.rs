//! Daily aggregation over the food log

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::{DailyTotals, LogEntry};
use crate::session::LogStore;

/// Food entries logged on `date`, in insertion order
pub fn entries_for_date(log: &LogStore<LogEntry>, date: NaiveDate) -> Vec<&LogEntry> {
    log.for_date(date).collect()
}

/// Element-wise sum of every contribution logged on `date`
///
/// Returns all-zero totals when nothing matches.
pub fn daily_totals(log: &LogStore<LogEntry>, date: NaiveDate) -> DailyTotals {
    log.for_date(date).map(|e| e.nutrition).sum()
}

/// Distinct dates present in the log, oldest first
pub fn logged_dates(log: &LogStore<LogEntry>) -> Vec<NaiveDate> {
    log.iter()
        .map(|e| e.date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealType, Nutrition};
    use approx::assert_relative_eq;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn entry(day: u32, ingredient: &str, calories: f64, protein: f64, carbs: f64, fats: f64) -> LogEntry {
        LogEntry {
            date: date(day),
            ingredient: ingredient.to_string(),
            quantity_grams: 100.0,
            meal_type: MealType::Lunch,
            nutrition: Nutrition { calories, protein, carbs, fats },
        }
    }

    fn sample() -> Vec<LogEntry> {
        vec![
            entry(9, "Rice", 260.0, 5.4, 56.0, 0.6),
            entry(10, "Egg", 155.0, 13.0, 1.1, 11.0),
            entry(9, "Chicken", 300.0, 46.5, 0.0, 5.4),
            entry(9, "Apple", 52.0, 0.3, 14.0, 0.2),
        ]
    }

    #[test]
    fn test_empty_day_is_all_zero() {
        let log: LogStore<LogEntry> = sample().into_iter().collect();
        assert_eq!(daily_totals(&log, date(1)), Nutrition::zero());
        assert_eq!(daily_totals(&LogStore::new(), date(9)), Nutrition::zero());
    }

    #[test]
    fn test_totals_only_include_matching_date() {
        let log: LogStore<LogEntry> = sample().into_iter().collect();
        let totals = daily_totals(&log, date(9));
        assert_relative_eq!(totals.calories, 612.0, epsilon = 1e-9);
        assert_relative_eq!(totals.protein, 52.2, epsilon = 1e-9);
        assert_relative_eq!(totals.carbs, 70.0, epsilon = 1e-9);
        assert_relative_eq!(totals.fats, 6.2, epsilon = 1e-9);
    }

    #[test]
    fn test_totals_do_not_depend_on_insertion_order() {
        let forward: LogStore<LogEntry> = sample().into_iter().collect();
        let reversed: LogStore<LogEntry> = sample().into_iter().rev().collect();
        let rotated: LogStore<LogEntry> = {
            let mut entries = sample();
            entries.rotate_left(2);
            entries.into_iter().collect()
        };

        let expected = daily_totals(&forward, date(9));
        for log in [&reversed, &rotated] {
            let totals = daily_totals(log, date(9));
            assert_relative_eq!(totals.calories, expected.calories, epsilon = 1e-9);
            assert_relative_eq!(totals.protein, expected.protein, epsilon = 1e-9);
            assert_relative_eq!(totals.carbs, expected.carbs, epsilon = 1e-9);
            assert_relative_eq!(totals.fats, expected.fats, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_entries_for_date_keep_insertion_order() {
        let log: LogStore<LogEntry> = sample().into_iter().collect();
        let names: Vec<&str> = entries_for_date(&log, date(9))
            .iter()
            .map(|e| e.ingredient.as_str())
            .collect();
        assert_eq!(names, vec!["Rice", "Chicken", "Apple"]);
    }

    #[test]
    fn test_logged_dates_are_distinct_and_sorted() {
        let log: LogStore<LogEntry> = sample().into_iter().rev().collect();
        assert_eq!(logged_dates(&log), vec![date(9), date(10)]);
    }
}
