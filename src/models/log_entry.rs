//! Food log entry model
//!
//! A single logged food item with its precomputed contribution.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use super::Nutrition;

/// Meal type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            _ => Err(TrackerError::InvalidMealType(s.to_string())),
        }
    }
}

/// A logged food entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: NaiveDate,
    pub ingredient: String,
    pub quantity_grams: f64,
    pub meal_type: MealType,
    pub nutrition: Nutrition,
}

/// A validated food submission, ready for calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntryCreate {
    pub date: NaiveDate,
    pub ingredient: String,
    pub quantity_grams: f64,
    pub meal_type: MealType,
}

/// Smallest quantity the input boundary accepts
pub const MIN_QUANTITY_GRAMS: f64 = 1.0;

impl LogEntryCreate {
    /// Build a submission from raw form values
    ///
    /// `date` defaults to `today` when absent or blank.
    pub fn parse(
        ingredient: &str,
        quantity_grams: f64,
        meal_type: &str,
        date: Option<&str>,
        today: NaiveDate,
    ) -> Result<Self, TrackerError> {
        if !quantity_grams.is_finite() || quantity_grams < MIN_QUANTITY_GRAMS {
            return Err(TrackerError::InvalidQuantity(quantity_grams));
        }
        let meal_type = meal_type.parse::<MealType>()?;
        let date = match date {
            Some(s) if !s.trim().is_empty() => parse_date(s)?,
            _ => today,
        };

        Ok(Self {
            date,
            ingredient: ingredient.trim().to_string(),
            quantity_grams,
            meal_type,
        })
    }
}

impl LogEntry {
    /// Attach a computed contribution to a submission
    pub fn new(data: LogEntryCreate, nutrition: Nutrition) -> Self {
        Self {
            date: data.date,
            ingredient: data.ingredient,
            quantity_grams: data.quantity_grams,
            meal_type: data.meal_type,
            nutrition,
        }
    }
}

/// Parse an ISO date ("2025-01-09")
pub fn parse_date(s: &str) -> Result<NaiveDate, TrackerError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TrackerError::InvalidDate(s.to_string()))
}
