//! Nutrient contribution of a single logged quantity
//!
//! Macros scale by their per-gram rate. Calories scale by the ratio of the
//! consumed quantity to the reference portion, because the table stores
//! calories per portion rather than per gram.

use crate::error::TrackerError;
use crate::models::Nutrition;
use crate::reference::ReferenceRow;

/// Validated coefficients of a reference row
#[derive(Debug, Clone, Copy, PartialEq)]
struct Coefficients {
    protein_per_g: f64,
    carbs_per_g: f64,
    fats_per_g: f64,
    calories: f64,
    intake_g: f64,
}

fn invalid_data(row: &ReferenceRow, fields: &[&str]) -> TrackerError {
    TrackerError::InvalidReferenceData {
        ingredient: row.ingredient.clone(),
        reason: format!("missing or non-numeric {}", fields.join(", ")),
    }
}

fn coefficients(row: &ReferenceRow) -> Result<Coefficients, TrackerError> {
    let finite = |value: Option<f64>| value.filter(|v| v.is_finite());
    let (Some(protein_per_g), Some(carbs_per_g), Some(fats_per_g), Some(calories), Some(intake_g)) = (
        finite(row.protein_per_g),
        finite(row.carbs_per_g),
        finite(row.fats_per_g),
        finite(row.calories),
        finite(row.intake_g),
    ) else {
        return Err(invalid_data(row, &row.invalid_fields()));
    };
    if intake_g == 0.0 {
        return Err(TrackerError::InvalidReferenceData {
            ingredient: row.ingredient.clone(),
            reason: "reference portion Intake_g is zero".to_string(),
        });
    }

    Ok(Coefficients { protein_per_g, carbs_per_g, fats_per_g, calories, intake_g })
}

/// Compute the contribution of `quantity_grams` of a reference ingredient
///
/// Fails with `InvalidReferenceData` if any coefficient is unusable or the
/// reference portion is zero. `quantity_grams > 0` is checked at the input
/// boundary.
pub fn calculate_contribution(row: &ReferenceRow, quantity_grams: f64) -> Result<Nutrition, TrackerError> {
    let c = coefficients(row)?;

    Ok(Nutrition {
        protein: c.protein_per_g * quantity_grams,
        carbs: c.carbs_per_g * quantity_grams,
        fats: c.fats_per_g * quantity_grams,
        calories: c.calories * (quantity_grams / c.intake_g),
    })
}
