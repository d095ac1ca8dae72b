//! Shared nutrition data structure
//!
//! Used for per-entry contributions and daily totals.

use serde::{Deserialize, Serialize};

use super::Macro;

/// Macro-nutrient amounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fats: f64,    // grams
}

/// Sum of all contributions logged on one date
pub type DailyTotals = Nutrition;

impl Nutrition {
    /// Create a new Nutrition with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fats: self.fats + other.fats,
        }
    }

    /// Value for a single tracked macro
    pub fn get(&self, nutrient: Macro) -> f64 {
        match nutrient {
            Macro::Calories => self.calories,
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fats => self.fats,
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Nutrition = std::iter::empty().sum();
        assert_eq!(total, Nutrition::zero());
    }

    #[test]
    fn test_get_by_macro() {
        let n = Nutrition { calories: 1.0, protein: 2.0, carbs: 3.0, fats: 4.0 };
        assert_eq!(n.get(Macro::Calories), 1.0);
        assert_eq!(n.get(Macro::Protein), 2.0);
        assert_eq!(n.get(Macro::Carbs), 3.0);
        assert_eq!(n.get(Macro::Fats), 4.0);
    }

    #[test]
    fn test_sum_adds_each_field() {
        let total: Nutrition = vec![
            Nutrition { calories: 100.0, protein: 10.0, carbs: 5.0, fats: 1.0 },
            Nutrition { calories: 50.0, protein: 2.0, carbs: 20.0, fats: 3.0 },
        ]
        .into_iter()
        .sum();
        assert_eq!(total, Nutrition { calories: 150.0, protein: 12.0, carbs: 25.0, fats: 4.0 });
    }
}
