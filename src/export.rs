//! CSV export of a day's food log

use polars::prelude::*;

use crate::error::TrackerError;
use crate::models::LogEntry;

/// Suggested file name for a day export
pub const EXPORT_FILE_NAME: &str = "today_log.csv";

/// Export columns, in order
pub const EXPORT_COLUMNS: [&str; 8] = [
    "Date",
    "Ingredient",
    "Qty (g)",
    "Meal",
    "Protein",
    "Carbs",
    "Fats",
    "Calories",
];

fn entries_frame(entries: &[&LogEntry]) -> PolarsResult<DataFrame> {
    df!(
        EXPORT_COLUMNS[0] => entries.iter().map(|e| e.date.format("%Y-%m-%d").to_string()).collect::<Vec<_>>(),
        EXPORT_COLUMNS[1] => entries.iter().map(|e| e.ingredient.clone()).collect::<Vec<_>>(),
        EXPORT_COLUMNS[2] => entries.iter().map(|e| e.quantity_grams).collect::<Vec<_>>(),
        EXPORT_COLUMNS[3] => entries.iter().map(|e| e.meal_type.as_str()).collect::<Vec<_>>(),
        EXPORT_COLUMNS[4] => entries.iter().map(|e| e.nutrition.protein).collect::<Vec<_>>(),
        EXPORT_COLUMNS[5] => entries.iter().map(|e| e.nutrition.carbs).collect::<Vec<_>>(),
        EXPORT_COLUMNS[6] => entries.iter().map(|e| e.nutrition.fats).collect::<Vec<_>>(),
        EXPORT_COLUMNS[7] => entries.iter().map(|e| e.nutrition.calories).collect::<Vec<_>>(),
    )
}

/// Serialize entries as CSV with a header row
///
/// An empty slice yields the header only.
pub fn entries_to_csv(entries: &[&LogEntry]) -> Result<String, TrackerError> {
    if entries.is_empty() {
        return Ok(format!("{}\n", EXPORT_COLUMNS.join(",")));
    }

    let mut df = entries_frame(entries).map_err(|e| TrackerError::Export(e.to_string()))?;
    let mut buf = Vec::new();
    CsvWriter::new(&mut buf)
        .include_header(true)
        .finish(&mut df)
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    String::from_utf8(buf).map_err(|e| TrackerError::Export(e.to_string()))
}
