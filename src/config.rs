//! Startup configuration
//!
//! Read once from the environment; constant for the life of the process.

use std::path::PathBuf;

use tracing::warn;

use crate::models::{Macro, MacroTargets};

/// Reference CSV path override
pub const REFERENCE_PATH_VAR: &str = "MACROTRACK_REFERENCE_PATH";

/// Default reference file name under `<project root>/data`
pub const DEFAULT_REFERENCE_FILE: &str = "cleaned_food_data.csv";

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub reference_path: PathBuf,
    pub targets: MacroTargets,
}

impl Config {
    /// Build configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let reference_path = lookup(REFERENCE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_reference_path);

        let mut targets = MacroTargets::default();
        for nutrient in Macro::ALL {
            let var = target_var(nutrient);
            let Some(raw) = lookup(&var) else {
                continue;
            };
            match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 => targets.set(nutrient, value),
                _ => warn!(variable = %var, value = %raw, "Ignoring invalid macro target override"),
            }
        }

        Self { reference_path, targets }
    }
}

/// Environment variable overriding the target for `nutrient`
pub fn target_var(nutrient: Macro) -> String {
    format!("MACROTRACK_TARGET_{}", nutrient.as_str().to_uppercase())
}

/// `<project root>/data/cleaned_food_data.csv`, where the project root is
/// the executable's directory with `target/{debug,release}` stripped
pub fn default_reference_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(parent) = path.parent() {
            if let Some(grandparent) = parent.parent() {
                path = grandparent.to_path_buf();
            }
        }
    }

    path.push("data");
    path.push(DEFAULT_REFERENCE_FILE);
    path
}
