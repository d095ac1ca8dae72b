//! Utility to validate a nutrition reference CSV
//!
//! Usage: check_reference [path]
//! Falls back to MACROTRACK_REFERENCE_PATH / the default data path.

use std::path::PathBuf;

use macrotrack::config::Config;
use macrotrack::reference::{load_reference_table, REQUIRED_COLUMNS};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Config::from_env().reference_path);
    println!("Reference path: {}", path.display());
    println!("Required columns: {}", REQUIRED_COLUMNS.join(", "));

    let table = load_reference_table(&path)?;
    println!("Ingredients: {}", table.len());

    let mut invalid = 0;
    for row in table.rows() {
        if row.is_usable() {
            continue;
        }
        invalid += 1;
        let fields = row.invalid_fields();
        if fields.is_empty() {
            println!("  {}: Intake_g is zero", row.ingredient);
        } else {
            println!("  {}: invalid {}", row.ingredient, fields.join(", "));
        }
    }

    if invalid > 0 {
        println!("{} of {} rows cannot be used for calculation", invalid, table.len());
        std::process::exit(1);
    }

    println!("All rows are usable");
    Ok(())
}
