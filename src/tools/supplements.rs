//! Supplement log tools
//!
//! Append and list only; supplements do not feed any totals.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::SupplementEntry;
use crate::session::Session;

use super::resolve_date;

/// Response for list_supplements
#[derive(Debug, Serialize)]
pub struct ListSupplementsResponse {
    pub date: Option<NaiveDate>,
    pub supplements: Vec<SupplementEntry>,
    pub total: usize,
}

pub fn log_supplement(
    session: &mut Session,
    name: &str,
    dose: &str,
    notes: Option<String>,
    date: Option<&str>,
    today: NaiveDate,
) -> Result<SupplementEntry, String> {
    let date = resolve_date(date, today)?;
    let entry = SupplementEntry::new(date, name, dose, notes).map_err(|e| e.to_string())?;
    Ok(session.log_supplement(entry).clone())
}

/// List supplements for one date, or the whole session log when no date is given
pub fn list_supplements(session: &Session, date: Option<&str>) -> Result<ListSupplementsResponse, String> {
    let date = match date {
        Some(s) if !s.trim().is_empty() => Some(crate::models::parse_date(s).map_err(|e| e.to_string())?),
        _ => None,
    };

    let supplements: Vec<SupplementEntry> = match date {
        Some(d) => session.supplement_log.for_date(d).cloned().collect(),
        None => session.supplement_log.iter().cloned().collect(),
    };

    Ok(ListSupplementsResponse { date, total: supplements.len(), supplements })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 9).unwrap()
    }

    #[test]
    fn test_log_and_list() {
        let mut session = Session::new();
        log_supplement(&mut session, "Creatine", "5 g", None, None, today()).unwrap();
        log_supplement(&mut session, "Vitamin D", "1000 IU", None, Some("2025-01-08"), today()).unwrap();

        let all = list_supplements(&session, None).unwrap();
        assert_eq!(all.total, 2);

        let today_only = list_supplements(&session, Some("2025-01-09")).unwrap();
        assert_eq!(today_only.total, 1);
        assert_eq!(today_only.supplements[0].name, "Creatine");
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut session = Session::new();
        let err = log_supplement(&mut session, "  ", "5 g", None, None, today()).unwrap_err();
        assert!(err.contains("name"));
        assert!(session.supplement_log.is_empty());
    }
}
