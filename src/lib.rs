//! EduCenter
//!
//! Administration backend for an education center: students, teachers,
//! courses and groups behind a small REST API, two AI-assisted text
//! generators, and a headless dashboard layer that drives the API.

#![allow(non_snake_case)]

pub mod client;
pub mod config;
pub mod dashboard;
pub mod database;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EduCenterError, Result};

// Re-export main components for easy access
pub use client::ApiClient;
pub use database::{DatabaseService, MemoryStore, Store};
pub use handlers::AppState;
pub use services::AiService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
