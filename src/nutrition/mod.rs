//! Nutrition calculation module
//!
//! Calculator, daily aggregation and target evaluation. All pure functions,
//! recomputed from the session log on every interaction.

pub mod aggregator;
pub mod calculator;
pub mod evaluator;

pub use aggregator::{daily_totals, entries_for_date, logged_dates};
pub use calculator::calculate_contribution;
pub use evaluator::{evaluate, MacroAdvisory, TargetStatus};
