//! Body weight log entry model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// A body weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

impl WeightEntry {
    pub fn new(date: NaiveDate, weight_kg: f64) -> Result<Self, TrackerError> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(TrackerError::InvalidWeight(weight_kg));
        }
        Ok(Self { date, weight_kg })
    }
}
