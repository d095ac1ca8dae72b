//! Daily totals compared against macro targets

use serde::Serialize;

use crate::models::{DailyTotals, Macro, MacroTargets};

/// Advisory flag for one macro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetStatus {
    WithinTarget,
    Exceeded,
}

/// Outcome for one tracked macro
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroAdvisory {
    pub nutrient: Macro,
    pub total: f64,
    pub target: f64,
    pub status: TargetStatus,
    /// Rendered value, e.g. "560 kcal" or "52.2 g"
    pub display: String,
    /// Rendered target, e.g. "Target: 2000"
    pub target_display: String,
    /// Present only when the target is exceeded
    pub warning: Option<String>,
}

impl MacroAdvisory {
    pub fn is_exceeded(&self) -> bool {
        self.status == TargetStatus::Exceeded
    }
}

/// Flag each macro whose total is strictly above its target
pub fn evaluate(totals: &DailyTotals, targets: &MacroTargets) -> Vec<MacroAdvisory> {
    Macro::ALL
        .iter()
        .map(|&nutrient| {
            let total = totals.get(nutrient);
            let target = targets.get(nutrient);
            let status = if total > target {
                TargetStatus::Exceeded
            } else {
                TargetStatus::WithinTarget
            };

            MacroAdvisory {
                nutrient,
                total,
                target,
                status,
                display: format_total(nutrient, total),
                target_display: format!("Target: {}", target),
                warning: (status == TargetStatus::Exceeded)
                    .then(|| format!("{} intake exceeds your target ({})", nutrient, target)),
            }
        })
        .collect()
}

fn format_total(nutrient: Macro, total: f64) -> String {
    match nutrient {
        Macro::Calories => format!("{:.0} {}", total, nutrient.unit()),
        _ => format!("{:.1} {}", total, nutrient.unit()),
    }
}
