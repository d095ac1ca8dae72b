//! Nutrition reference table
//!
//! Immutable ingredient lookup loaded once at startup.

pub mod loader;
pub mod table;

pub use loader::{load_reference_table, ReferenceError, REQUIRED_COLUMNS};
pub use table::{ReferenceRow, ReferenceTable};
