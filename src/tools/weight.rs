//! Body weight log tools

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::WeightEntry;
use crate::session::Session;

use super::resolve_date;

/// Response for list_weights
#[derive(Debug, Serialize)]
pub struct ListWeightsResponse {
    pub weights: Vec<WeightEntry>,
    pub latest: Option<WeightEntry>,
    pub total: usize,
}

pub fn log_weight(
    session: &mut Session,
    weight_kg: f64,
    date: Option<&str>,
    today: NaiveDate,
) -> Result<WeightEntry, String> {
    let date = resolve_date(date, today)?;
    let entry = WeightEntry::new(date, weight_kg).map_err(|e| e.to_string())?;
    Ok(session.log_weight(entry).clone())
}

/// All weights in the order they were logged
pub fn list_weights(session: &Session) -> ListWeightsResponse {
    let weights: Vec<WeightEntry> = session.weight_log.iter().cloned().collect();
    ListWeightsResponse {
        latest: weights.last().cloned(),
        total: weights.len(),
        weights,
    }
}
