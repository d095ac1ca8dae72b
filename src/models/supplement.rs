//! Supplement log entry model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// A logged supplement dose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementEntry {
    pub date: NaiveDate,
    pub name: String,
    pub dose: String, // free text, e.g. "5 g" or "2 capsules"
    pub notes: Option<String>,
}

impl SupplementEntry {
    pub fn new(
        date: NaiveDate,
        name: &str,
        dose: &str,
        notes: Option<String>,
    ) -> Result<Self, TrackerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::InvalidSupplement("name must not be empty".to_string()));
        }
        let dose = dose.trim();
        if dose.is_empty() {
            return Err(TrackerError::InvalidSupplement("dose must not be empty".to_string()));
        }

        Ok(Self {
            date,
            name: name.to_string(),
            dose: dose.to_string(),
            notes: notes.filter(|n| !n.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_drops_blank_notes() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let entry = SupplementEntry::new(date, " Creatine ", "5 g", Some("  ".to_string())).unwrap();
        assert_eq!(entry.name, "Creatine");
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn test_new_requires_name_and_dose() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(SupplementEntry::new(date, "", "5 g", None).is_err());
        assert!(SupplementEntry::new(date, "Creatine", " ", None).is_err());
    }
}
