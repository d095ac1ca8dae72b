//! Macrotrack
//!
//! An MCP server for session food logging against daily macro targets.

use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

use macrotrack::build_info;
use macrotrack::config::Config;
use macrotrack::mcp::MacrotrackService;
use macrotrack::reference::load_reference_table;
use macrotrack::TrackerError;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("macrotrack=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env();
    eprintln!("Reference table: {}", config.reference_path.display());
    info!(targets = ?config.targets, "Macro targets");

    // Missing reference data is fatal before any interaction is served
    let reference = load_reference_table(&config.reference_path).map_err(TrackerError::from)?;

    let service = MacrotrackService::new(&config, Arc::new(reference));

    eprintln!("Starting MCP server on stdio...");
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
