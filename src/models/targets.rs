//! Macro targets
//!
//! The fixed per-day targets a session's totals are compared against.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tracked macro-nutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Macro {
    Calories,
    Protein,
    Carbs,
    Fats,
}

impl Macro {
    /// All tracked macros, in display order
    pub const ALL: [Macro; 4] = [Macro::Calories, Macro::Protein, Macro::Carbs, Macro::Fats];

    pub fn as_str(&self) -> &'static str {
        match self {
            Macro::Calories => "Calories",
            Macro::Protein => "Protein",
            Macro::Carbs => "Carbs",
            Macro::Fats => "Fats",
        }
    }

    /// Unit used when rendering a total for this macro
    pub fn unit(&self) -> &'static str {
        match self {
            Macro::Calories => "kcal",
            _ => "g",
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily macro targets, constant for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Default for MacroTargets {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein: 150.0,
            carbs: 200.0,
            fats: 70.0,
        }
    }
}

impl MacroTargets {
    pub fn get(&self, nutrient: Macro) -> f64 {
        match nutrient {
            Macro::Calories => self.calories,
            Macro::Protein => self.protein,
            Macro::Carbs => self.carbs,
            Macro::Fats => self.fats,
        }
    }

    pub fn set(&mut self, nutrient: Macro, value: f64) {
        match nutrient {
            Macro::Calories => self.calories = value,
            Macro::Protein => self.protein = value,
            Macro::Carbs => self.carbs = value,
            Macro::Fats => self.fats = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets() {
        let targets = MacroTargets::default();
        assert_eq!(targets.get(Macro::Calories), 2000.0);
        assert_eq!(targets.get(Macro::Protein), 150.0);
        assert_eq!(targets.get(Macro::Carbs), 200.0);
        assert_eq!(targets.get(Macro::Fats), 70.0);
    }

    #[test]
    fn test_set_single_target() {
        let mut targets = MacroTargets::default();
        targets.set(Macro::Fats, 55.0);
        assert_eq!(targets.fats, 55.0);
        assert_eq!(targets.calories, 2000.0);
    }
}
