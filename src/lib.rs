//! Macrotrack Library
//!
//! Session food logging with daily macro totals and target advisories.

pub mod build_info;
pub mod config;
pub mod error;
pub mod export;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod reference;
pub mod session;
pub mod tools;

pub use error::TrackerError;
