//! Macrotrack MCP Server Implementation
//!
//! One service instance per connection; the instance owns that session's logs.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::MacroTargets;
use crate::reference::ReferenceTable;
use crate::session::Session;
use crate::tools::status::StatusTracker;
use crate::tools::{food_log, reference, supplements, weight};

/// Macrotrack MCP Service
#[derive(Clone)]
pub struct MacrotrackService {
    status_tracker: Arc<StatusTracker>,
    reference: Arc<ReferenceTable>,
    targets: MacroTargets,
    session: Arc<Mutex<Session>>,
    tool_router: ToolRouter<MacrotrackService>,
}

impl MacrotrackService {
    pub fn new(config: &Config, reference: Arc<ReferenceTable>) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(config.reference_path.clone(), reference.len())),
            reference,
            targets: config.targets,
            session: Arc::new(Mutex::new(Session::new())),
            tool_router: Self::tool_router(),
        }
    }

    fn session(&self) -> Result<MutexGuard<'_, Session>, McpError> {
        self.session
            .lock()
            .map_err(|_| McpError::internal_error("Session state is unavailable", None))
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Food Log Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogFoodParams {
    /// Exact ingredient name from list_ingredients
    pub ingredient: String,
    /// Grams consumed (at least 1)
    pub quantity_grams: f64,
    /// breakfast, lunch, dinner or snack (default breakfast)
    #[serde(default = "default_meal_type")]
    pub meal_type: String,
    /// Date in YYYY-MM-DD format (default today)
    pub date: Option<String>,
}

fn default_meal_type() -> String { "breakfast".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DateParams {
    /// Date in YYYY-MM-DD format (default today)
    pub date: Option<String>,
}

// ============================================================================
// Reference Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListIngredientsParams {
    /// Optional case-insensitive name filter
    pub query: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetIngredientParams {
    /// Exact ingredient name
    pub name: String,
}

// ============================================================================
// Supplement / Weight Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogSupplementParams {
    pub name: String,
    /// Free-text dose, e.g. "5 g" or "2 capsules"
    pub dose: String,
    pub notes: Option<String>,
    /// Date in YYYY-MM-DD format (default today)
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListSupplementsParams {
    /// Date in YYYY-MM-DD format (omit for the whole session)
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogWeightParams {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Date in YYYY-MM-DD format (default today)
    pub date: Option<String>,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl MacrotrackService {
    // --- Status ---

    #[tool(description = "Get the current status of the Macrotrack service including build info, reference table, session log sizes, and process information")]
    fn macrotrack_status(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        json_result(&self.status_tracker.get_status(&session))
    }

    #[tool(description = "Get step-by-step instructions for logging food. Call this when starting a food logging session or when unsure how to use the tools.")]
    fn food_log_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::FOOD_LOG_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(FOOD_LOG_INSTRUCTIONS)]))
    }

    #[tool(description = "Get the daily macro targets (calories, protein, carbs, fats) used for warnings")]
    fn get_targets(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.targets)
    }

    // --- Reference ---

    #[tool(description = "List ingredient names from the nutrition reference table, sorted, with optional name filter")]
    fn list_ingredients(&self, Parameters(p): Parameters<ListIngredientsParams>) -> Result<CallToolResult, McpError> {
        json_result(&reference::list_ingredients(&self.reference, p.query.as_deref()))
    }

    #[tool(description = "Get the reference nutrition values for an ingredient and whether they are usable")]
    fn get_ingredient(&self, Parameters(p): Parameters<GetIngredientParams>) -> Result<CallToolResult, McpError> {
        match reference::get_ingredient(&self.reference, &p.name) {
            Some(detail) => json_result(&detail),
            None => json_result(&serde_json::json!({ "error": "Ingredient not found", "name": p.name })),
        }
    }

    // --- Food Log ---

    #[tool(description = "Log food eaten. Calculates protein/carbs/fats per gram and calories by reference portion, then returns the day's totals and target warnings.")]
    fn log_food(&self, Parameters(p): Parameters<LogFoodParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.session()?;
        let result = food_log::log_food(
            &self.reference, &mut session, &self.targets,
            &p.ingredient, p.quantity_grams, &p.meal_type, p.date.as_deref(), today(),
        )
        .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get a day's food entries grouped by meal, totals, and target advisories")]
    fn get_day(&self, Parameters(p): Parameters<DateParams>) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        let result = food_log::get_day(&session, &self.targets, p.date.as_deref(), today())
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List every date with food logged in this session, with calorie totals")]
    fn list_logged_dates(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        json_result(&food_log::list_logged_dates(&session, &self.targets))
    }

    #[tool(description = "Export a day's food log as CSV text (suggested file name today_log.csv)")]
    fn export_day_csv(&self, Parameters(p): Parameters<DateParams>) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        let result = food_log::export_day_csv(&session, p.date.as_deref(), today())
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    // --- Supplements ---

    #[tool(description = "Log a supplement dose for a date")]
    fn log_supplement(&self, Parameters(p): Parameters<LogSupplementParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.session()?;
        let result = supplements::log_supplement(&mut session, &p.name, &p.dose, p.notes, p.date.as_deref(), today())
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List logged supplements for a date, or for the whole session when no date is given")]
    fn list_supplements(&self, Parameters(p): Parameters<ListSupplementsParams>) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        let result = supplements::list_supplements(&session, p.date.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    // --- Weight ---

    #[tool(description = "Log body weight in kilograms for a date")]
    fn log_weight(&self, Parameters(p): Parameters<LogWeightParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.session()?;
        let result = weight::log_weight(&mut session, p.weight_kg, p.date.as_deref(), today())
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List body weights logged in this session, oldest first")]
    fn list_weights(&self) -> Result<CallToolResult, McpError> {
        let session = self.session()?;
        json_result(&weight::list_weights(&session))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for MacrotrackService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "macrotrack".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Macrotrack".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Macrotrack - session food log with daily macro targets. \
                 Call food_log_instructions first. \
                 Reference: list_ingredients/get_ingredient. \
                 Food: log_food/get_day/list_logged_dates/export_day_csv, get_targets. \
                 Supplements: log_supplement/list_supplements. Weight: log_weight/list_weights. \
                 Logs last for this session only."
                    .into(),
            ),
        }
    }
}
