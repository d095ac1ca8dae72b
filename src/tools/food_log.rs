//! Food log tools
//!
//! Logging meals, the per-day view with totals and target advisories, and
//! CSV export.

use chrono::NaiveDate;
use serde::Serialize;

use crate::export::{entries_to_csv, EXPORT_FILE_NAME};
use crate::models::{DailyTotals, LogEntry, LogEntryCreate, MacroTargets, MealType};
use crate::nutrition::{daily_totals, entries_for_date, evaluate, logged_dates, MacroAdvisory};
use crate::reference::ReferenceTable;
use crate::session::Session;

use super::resolve_date;

/// Meals organized by type
#[derive(Debug, Default, Serialize)]
pub struct DayMeals {
    pub breakfast: Vec<LogEntry>,
    pub lunch: Vec<LogEntry>,
    pub dinner: Vec<LogEntry>,
    pub snack: Vec<LogEntry>,
}

/// Full view of one day
#[derive(Debug, Serialize)]
pub struct DayDetail {
    pub date: NaiveDate,
    pub entry_count: usize,
    /// Entries in the order they were logged
    pub entries: Vec<LogEntry>,
    pub meals: DayMeals,
    pub totals: DailyTotals,
    pub advisories: Vec<MacroAdvisory>,
    pub warnings: Vec<String>,
}

/// Response for log_food
#[derive(Debug, Serialize)]
pub struct LogFoodResponse {
    pub entry: LogEntry,
    pub day: DayDetail,
}

/// Day summary for listing
#[derive(Debug, Serialize)]
pub struct LoggedDaySummary {
    pub date: NaiveDate,
    pub entry_count: usize,
    pub total_calories: f64,
    pub any_target_exceeded: bool,
}

/// Response for list_logged_dates
#[derive(Debug, Serialize)]
pub struct ListLoggedDatesResponse {
    pub days: Vec<LoggedDaySummary>,
    pub total: usize,
}

/// Response for export_day_csv
#[derive(Debug, Serialize)]
pub struct ExportDayResponse {
    pub date: NaiveDate,
    pub file_name: &'static str,
    pub row_count: usize,
    pub csv: String,
}

/// Build the day view: filter, aggregate, evaluate
pub fn build_day_detail(session: &Session, targets: &MacroTargets, date: NaiveDate) -> DayDetail {
    let entries: Vec<LogEntry> = entries_for_date(&session.food_log, date)
        .into_iter()
        .cloned()
        .collect();

    let mut meals = DayMeals::default();
    for entry in &entries {
        let bucket = match entry.meal_type {
            MealType::Breakfast => &mut meals.breakfast,
            MealType::Lunch => &mut meals.lunch,
            MealType::Dinner => &mut meals.dinner,
            MealType::Snack => &mut meals.snack,
        };
        bucket.push(entry.clone());
    }

    let totals = daily_totals(&session.food_log, date);
    let advisories = evaluate(&totals, targets);
    let warnings = advisories.iter().filter_map(|a| a.warning.clone()).collect();

    DayDetail {
        date,
        entry_count: entries.len(),
        entries,
        meals,
        totals,
        advisories,
        warnings,
    }
}

/// Log a food entry and return the recomputed day
#[allow(clippy::too_many_arguments)]
pub fn log_food(
    reference: &ReferenceTable,
    session: &mut Session,
    targets: &MacroTargets,
    ingredient: &str,
    quantity_grams: f64,
    meal_type: &str,
    date: Option<&str>,
    today: NaiveDate,
) -> Result<LogFoodResponse, String> {
    let data = LogEntryCreate::parse(ingredient, quantity_grams, meal_type, date, today)
        .map_err(|e| e.to_string())?;

    let entry = session
        .log_food(reference, data)
        .map_err(|e| e.to_string())?
        .clone();

    let day = build_day_detail(session, targets, entry.date);
    Ok(LogFoodResponse { entry, day })
}

/// Get the day view for a date (default today)
pub fn get_day(
    session: &Session,
    targets: &MacroTargets,
    date: Option<&str>,
    today: NaiveDate,
) -> Result<DayDetail, String> {
    let date = resolve_date(date, today)?;
    Ok(build_day_detail(session, targets, date))
}

/// List every date with logged food in this session
pub fn list_logged_dates(session: &Session, targets: &MacroTargets) -> ListLoggedDatesResponse {
    let days: Vec<LoggedDaySummary> = logged_dates(&session.food_log)
        .into_iter()
        .map(|date| {
            let totals = daily_totals(&session.food_log, date);
            LoggedDaySummary {
                date,
                entry_count: session.food_log.for_date(date).count(),
                total_calories: totals.calories,
                any_target_exceeded: evaluate(&totals, targets).iter().any(|a| a.is_exceeded()),
            }
        })
        .collect();

    ListLoggedDatesResponse { total: days.len(), days }
}

/// Export a day's food entries as CSV
pub fn export_day_csv(
    session: &Session,
    date: Option<&str>,
    today: NaiveDate,
) -> Result<ExportDayResponse, String> {
    let date = resolve_date(date, today)?;
    let entries = entries_for_date(&session.food_log, date);
    let csv = entries_to_csv(&entries).map_err(|e| e.to_string())?;

    Ok(ExportDayResponse {
        date,
        file_name: EXPORT_FILE_NAME,
        row_count: entries.len(),
        csv,
    })
}
