//! Reference table loading
//!
//! Reads the reference CSV with Polars. Every column is read as text and
//! numeric cells are parsed here, so a bad cell marks the field invalid
//! instead of failing the whole load.

use std::path::{Path, PathBuf};

use polars::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

use super::table::{ReferenceRow, ReferenceTable};
use crate::error::TrackerError;

/// Columns the reference CSV must provide
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Ingredient",
    "Protein_per_g",
    "Carbs_per_g",
    "Fats_per_g",
    "Calories",
    "Intake_g",
];

/// Reference loading error types
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Reference file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Reference file is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Failed to read reference CSV: {0}")]
    Polars(#[from] PolarsError),
}

impl From<ReferenceError> for TrackerError {
    fn from(e: ReferenceError) -> Self {
        match e {
            ReferenceError::Missing(path) => TrackerError::MissingReferenceData(path),
            other => TrackerError::InvalidReferenceData {
                ingredient: "*".to_string(),
                reason: other.to_string(),
            },
        }
    }
}

/// Load the reference table from a CSV file
pub fn load_reference_table(path: &Path) -> Result<ReferenceTable, ReferenceError> {
    if !path.is_file() {
        return Err(ReferenceError::Missing(path.to_path_buf()));
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let table = table_from_frame(&df)?;
    info!(path = %path.display(), ingredients = table.len(), "Loaded reference table");

    let invalid = table.rows().filter(|r| !r.invalid_fields().is_empty()).count();
    if invalid > 0 {
        warn!(rows = invalid, "Reference table has rows with invalid nutrition values");
    }

    Ok(table)
}

fn text_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked, ReferenceError> {
    let column = df
        .column(name)
        .map_err(|_| ReferenceError::MissingColumn(name.to_string()))?;
    Ok(column.str()?)
}

fn table_from_frame(df: &DataFrame) -> Result<ReferenceTable, ReferenceError> {
    let ingredient = text_column(df, "Ingredient")?;
    let protein = text_column(df, "Protein_per_g")?;
    let carbs = text_column(df, "Carbs_per_g")?;
    let fats = text_column(df, "Fats_per_g")?;
    let calories = text_column(df, "Calories")?;
    let intake = text_column(df, "Intake_g")?;

    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        // Rows without an ingredient name cannot be selected
        let name = match ingredient.get(idx).map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => {
                warn!(row = idx + 2, "Skipping reference row without an ingredient");
                continue;
            }
        };

        rows.push(ReferenceRow {
            ingredient: name.to_string(),
            protein_per_g: parse_numeric(protein.get(idx)),
            carbs_per_g: parse_numeric(carbs.get(idx)),
            fats_per_g: parse_numeric(fats.get(idx)),
            calories: parse_numeric(calories.get(idx)),
            intake_g: parse_numeric(intake.get(idx)),
        });
    }

    Ok(ReferenceTable::from_rows(rows))
}

/// Parse a numeric cell; empty, non-numeric and non-finite cells become `None`
fn parse_numeric(cell: Option<&str>) -> Option<f64> {
    cell.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric(Some("0.027")), Some(0.027));
        assert_eq!(parse_numeric(Some(" 130 ")), Some(130.0));
        assert_eq!(parse_numeric(Some("n/a")), None);
        assert_eq!(parse_numeric(Some("NaN")), None);
        assert_eq!(parse_numeric(Some("inf")), None);
        assert_eq!(parse_numeric(None), None);
    }

    #[test]
    fn test_load_valid_table() {
        let file = write_csv(
            "Ingredient,Protein_per_g,Carbs_per_g,Fats_per_g,Calories,Intake_g\n\
             Rice,0.027,0.28,0.003,130,100\n\
             \"Chicken, breast\",0.31,0,0.036,165,100\n",
        );
        let table = load_reference_table(file.path()).unwrap();
        assert_eq!(table.len(), 2);

        let rice = table.get("Rice").unwrap();
        assert_eq!(rice.protein_per_g, Some(0.027));
        assert_eq!(rice.intake_g, Some(100.0));
        assert!(table.get("Chicken, breast").is_some());
    }

    #[test]
    fn test_load_marks_bad_cells_invalid() {
        let file = write_csv(
            "Ingredient,Protein_per_g,Carbs_per_g,Fats_per_g,Calories,Intake_g\n\
             Mystery,abc,0.1,,50,100\n",
        );
        let table = load_reference_table(file.path()).unwrap();
        let row = table.get("Mystery").unwrap();
        assert_eq!(row.invalid_fields(), vec!["Protein_per_g", "Fats_per_g"]);
    }

    #[test]
    fn test_load_skips_rows_without_ingredient() {
        let file = write_csv(
            "Ingredient,Protein_per_g,Carbs_per_g,Fats_per_g,Calories,Intake_g\n\
             ,0.1,0.1,0.1,10,100\n\
             Egg,0.13,0.011,0.11,155,100\n",
        );
        let table = load_reference_table(file.path()).unwrap();
        let names: Vec<&str> = table.ingredients().collect();
        assert_eq!(names, vec!["Egg"]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_reference_table(Path::new("/nonexistent/cleaned_food_data.csv")).unwrap_err();
        assert!(matches!(err, ReferenceError::Missing(_)));
        assert!(matches!(TrackerError::from(err), TrackerError::MissingReferenceData(_)));
    }

    #[test]
    fn test_missing_column() {
        let file = write_csv("Ingredient,Protein_per_g,Carbs_per_g,Fats_per_g,Calories\nRice,1,1,1,1\n");
        let err = load_reference_table(file.path()).unwrap_err();
        assert!(matches!(err, ReferenceError::MissingColumn(c) if c == "Intake_g"));
    }
}
