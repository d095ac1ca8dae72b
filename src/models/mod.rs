//! Data models
//!
//! Session log entries, nutrition amounts and targets.

mod log_entry;
mod nutrition;
mod supplement;
mod targets;
mod weight;

pub use log_entry::{parse_date, LogEntry, LogEntryCreate, MealType, MIN_QUANTITY_GRAMS};
pub use nutrition::{DailyTotals, Nutrition};
pub use supplement::SupplementEntry;
pub use targets::{Macro, MacroTargets};
pub use weight::WeightEntry;
