//! Error types for food log submissions

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while handling an interaction
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Reference data not found at '{}'", .0.display())]
    MissingReferenceData(PathBuf),

    #[error("Invalid reference data for '{ingredient}': {reason}")]
    InvalidReferenceData { ingredient: String, reason: String },

    #[error("Unknown ingredient: '{0}'")]
    UnknownIngredient(String),

    #[error("Quantity must be at least 1 g (got {0})")]
    InvalidQuantity(f64),

    #[error("Invalid meal type '{0}' (expected breakfast, lunch, dinner or snack)")]
    InvalidMealType(String),

    #[error("Invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid supplement entry: {0}")]
    InvalidSupplement(String),

    #[error("Weight must be a positive number of kilograms (got {0})")]
    InvalidWeight(f64),

    #[error("Failed to export log: {0}")]
    Export(String),
}
