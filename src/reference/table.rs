//! Reference rows and the ingredient lookup

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

/// One row of the reference table
///
/// Numeric cells that were empty, non-numeric or non-finite are held as `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceRow {
    pub ingredient: String,
    pub protein_per_g: Option<f64>,
    pub carbs_per_g: Option<f64>,
    pub fats_per_g: Option<f64>,
    /// Calories per reference portion
    pub calories: Option<f64>,
    /// Reference portion size in grams
    pub intake_g: Option<f64>,
}

impl ReferenceRow {
    /// Row with every numeric field present
    pub fn new(
        ingredient: &str,
        protein_per_g: f64,
        carbs_per_g: f64,
        fats_per_g: f64,
        calories: f64,
        intake_g: f64,
    ) -> Self {
        Self {
            ingredient: ingredient.to_string(),
            protein_per_g: Some(protein_per_g),
            carbs_per_g: Some(carbs_per_g),
            fats_per_g: Some(fats_per_g),
            calories: Some(calories),
            intake_g: Some(intake_g),
        }
    }

    /// Column names of numeric fields that are missing or not finite
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("Protein_per_g", self.protein_per_g),
            ("Carbs_per_g", self.carbs_per_g),
            ("Fats_per_g", self.fats_per_g),
            ("Calories", self.calories),
            ("Intake_g", self.intake_g),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_some_and(f64::is_finite))
        .map(|(name, _)| name)
        .collect()
    }

    /// Whether the calculator can use this row
    pub fn is_usable(&self) -> bool {
        self.invalid_fields().is_empty() && self.intake_g != Some(0.0)
    }
}

/// Ingredient lookup keyed by name, iterated in sorted order
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    rows: BTreeMap<String, ReferenceRow>,
}

impl ReferenceTable {
    /// Build a table; the first row wins when an ingredient repeats
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = ReferenceRow>,
    {
        let mut map = BTreeMap::new();
        for row in rows {
            if map.contains_key(&row.ingredient) {
                warn!(ingredient = %row.ingredient, "Duplicate ingredient in reference table, keeping first row");
                continue;
            }
            map.insert(row.ingredient.clone(), row);
        }
        Self { rows: map }
    }

    pub fn get(&self, ingredient: &str) -> Option<&ReferenceRow> {
        self.rows.get(ingredient)
    }

    /// Sorted unique ingredient names
    pub fn ingredients(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn rows(&self) -> impl Iterator<Item = &ReferenceRow> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
