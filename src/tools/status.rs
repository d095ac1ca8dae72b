//! Macrotrack status tool
//!
//! Runtime status and usage instructions.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::session::Session;

/// Food logging instructions for AI assistants
pub const FOOD_LOG_INSTRUCTIONS: &str = r#"
# Macrotrack Food Logging Instructions

Macrotrack keeps a food log for the current session only. Nothing is saved
when the session ends; use `export_day_csv` to keep a copy of a day.

## Logging a meal

1. Call `list_ingredients` (optionally with `query`) to find the exact
   ingredient name. Only names from the reference table are accepted.
2. Call `log_food` with:
   - `ingredient`: exact name from the list
   - `quantity_grams`: grams eaten, at least 1
   - `meal_type`: breakfast, lunch, dinner or snack
   - `date` (optional): YYYY-MM-DD, defaults to today
3. The response contains the new entry and the recomputed day, including
   totals and any target warnings.

## How nutrition is calculated

- Protein, carbs and fats: per-gram value x grams eaten
- Calories: reference calories x (grams eaten / reference portion grams)

If an ingredient's reference row has missing or non-numeric values the
submission is rejected and nothing is logged. `get_ingredient` shows which
fields are invalid.

## Reviewing

- `get_day`: entries by meal, totals, and advisories for a date
- `list_logged_dates`: every date with food logged this session
- `get_targets`: the daily targets in use
- A target is exceeded only when the total is strictly greater than it.

## Other logs

- `log_supplement` / `list_supplements`
- `log_weight` / `list_weights`
"#;

/// Runtime status of the Macrotrack service
#[derive(Debug, Clone, Serialize)]
pub struct MacrotrackStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Reference table information
    pub reference_path: String,
    pub reference_ingredients: usize,

    /// Session log sizes
    pub food_entries: usize,
    pub supplement_entries: usize,
    pub weight_entries: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    reference_path: PathBuf,
    reference_ingredients: usize,
}

impl StatusTracker {
    pub fn new(reference_path: PathBuf, reference_ingredients: usize) -> Self {
        Self {
            start_time: Instant::now(),
            reference_path,
            reference_ingredients,
        }
    }

    /// Get the current status
    pub fn get_status(&self, session: &Session) -> MacrotrackStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        MacrotrackStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            reference_path: self.reference_path.display().to_string(),
            reference_ingredients: self.reference_ingredients,
            food_entries: session.food_log.len(),
            supplement_entries: session.supplement_log.len(),
            weight_entries: session.weight_log.len(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
