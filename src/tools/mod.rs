//! Macrotrack tools module
//!
//! Tool implementations behind the MCP server. Each takes the session
//! context explicitly and returns a serializable response or a message.

pub mod food_log;
pub mod reference;
pub mod status;
pub mod supplements;
pub mod weight;

use chrono::NaiveDate;

use crate::models::parse_date;

/// Parse an optional ISO date, defaulting to `today`
pub(crate) fn resolve_date(date: Option<&str>, today: NaiveDate) -> Result<NaiveDate, String> {
    match date {
        Some(s) if !s.trim().is_empty() => parse_date(s).map_err(|e| e.to_string()),
        _ => Ok(today),
    }
}
