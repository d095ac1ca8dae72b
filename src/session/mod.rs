//! Per-session state
//!
//! One `Session` per interactive connection. It owns the three logs and is
//! passed explicitly to every interaction; nothing here outlives it.

mod log_store;

pub use log_store::{Dated, LogStore};

use tracing::{debug, warn};

use crate::error::TrackerError;
use crate::models::{LogEntry, LogEntryCreate, SupplementEntry, WeightEntry};
use crate::nutrition::calculate_contribution;
use crate::reference::ReferenceTable;

/// Session-scoped logs
#[derive(Debug, Default)]
pub struct Session {
    pub food_log: LogStore<LogEntry>,
    pub supplement_log: LogStore<SupplementEntry>,
    pub weight_log: LogStore<WeightEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate a food submission and append it to the food log
    ///
    /// The entry is appended only after a complete calculation; on error the
    /// log is left untouched.
    pub fn log_food(
        &mut self,
        reference: &ReferenceTable,
        data: LogEntryCreate,
    ) -> Result<&LogEntry, TrackerError> {
        let row = reference.get(&data.ingredient).ok_or_else(|| {
            warn!(ingredient = %data.ingredient, "Rejected food submission for unknown ingredient");
            TrackerError::UnknownIngredient(data.ingredient.clone())
        })?;

        let nutrition = calculate_contribution(row, data.quantity_grams).map_err(|e| {
            warn!(error = %e, "Rejected food submission");
            e
        })?;

        debug!(
            ingredient = %data.ingredient,
            quantity_grams = data.quantity_grams,
            date = %data.date,
            calories = nutrition.calories,
            "Logged food entry"
        );
        Ok(self.food_log.append(LogEntry::new(data, nutrition)))
    }

    pub fn log_supplement(&mut self, entry: SupplementEntry) -> &SupplementEntry {
        debug!(name = %entry.name, date = %entry.date, "Logged supplement");
        self.supplement_log.append(entry)
    }

    pub fn log_weight(&mut self, entry: WeightEntry) -> &WeightEntry {
        debug!(weight_kg = entry.weight_kg, date = %entry.date, "Logged weight");
        self.weight_log.append(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MacroTargets, MealType, Macro};
    use crate::nutrition::{daily_totals, evaluate, TargetStatus};
    use crate::reference::ReferenceRow;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 9).unwrap()
    }

    fn reference() -> ReferenceTable {
        let mut broken = ReferenceRow::new("Mystery Meat", 0.2, 0.0, 0.1, 200.0, 100.0);
        broken.protein_per_g = None;
        ReferenceTable::from_rows(vec![
            ReferenceRow::new("Rice", 0.027, 0.28, 0.003, 130.0, 100.0),
            ReferenceRow::new("Pasta", 0.05, 0.25, 0.011, 150.0, 100.0),
            broken,
        ])
    }

    fn submit(ingredient: &str, grams: f64) -> LogEntryCreate {
        LogEntryCreate {
            date: date(),
            ingredient: ingredient.to_string(),
            quantity_grams: grams,
            meal_type: MealType::Dinner,
        }
    }

    #[test]
    fn test_log_rice_end_to_end() {
        let mut session = Session::new();
        let entry = session.log_food(&reference(), submit("Rice", 200.0)).unwrap().clone();

        assert_relative_eq!(entry.nutrition.protein, 5.4, epsilon = 1e-9);
        assert_relative_eq!(entry.nutrition.carbs, 56.0, epsilon = 1e-9);
        assert_relative_eq!(entry.nutrition.fats, 0.6, epsilon = 1e-9);
        assert_relative_eq!(entry.nutrition.calories, 260.0, epsilon = 1e-9);
        assert_eq!(entry.meal_type, MealType::Dinner);
        assert_eq!(session.food_log.len(), 1);
    }

    #[test]
    fn test_two_entries_exceed_calorie_target() {
        let mut session = Session::new();
        let table = reference();
        session.log_food(&table, submit("Rice", 200.0)).unwrap(); // 260 kcal
        session.log_food(&table, submit("Pasta", 200.0)).unwrap(); // 300 kcal

        let totals = daily_totals(&session.food_log, date());
        assert_relative_eq!(totals.calories, 560.0, epsilon = 1e-9);

        let targets = MacroTargets { calories: 500.0, ..MacroTargets::default() };
        let advisories = evaluate(&totals, &targets);
        let calories = advisories.iter().find(|a| a.nutrient == Macro::Calories).unwrap();
        assert_eq!(calories.status, TargetStatus::Exceeded);
    }

    #[test]
    fn test_unknown_ingredient_leaves_log_unchanged() {
        let mut session = Session::new();
        let table = reference();
        session.log_food(&table, submit("Rice", 100.0)).unwrap();

        let err = session.log_food(&table, submit("Unobtainium", 100.0)).unwrap_err();
        assert!(matches!(err, TrackerError::UnknownIngredient(name) if name == "Unobtainium"));
        assert_eq!(session.food_log.len(), 1);
    }

    #[test]
    fn test_invalid_reference_row_leaves_log_unchanged() {
        let mut session = Session::new();
        let err = session.log_food(&reference(), submit("Mystery Meat", 100.0)).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidReferenceData { .. }));
        assert!(session.food_log.is_empty());
    }

    #[test]
    fn test_other_logs_are_independent() {
        let mut session = Session::new();
        session.log_weight(WeightEntry::new(date(), 80.2).unwrap());
        session.log_supplement(SupplementEntry::new(date(), "Creatine", "5 g", None).unwrap());

        assert_eq!(session.weight_log.len(), 1);
        assert_eq!(session.supplement_log.len(), 1);
        assert!(session.food_log.is_empty());
    }
}
