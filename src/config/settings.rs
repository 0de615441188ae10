//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub ai: AiConfig,
    pub logging: LoggingConfig,
    pub dashboard: DashboardConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the built dashboard bundle (`index.html` and assets)
    pub static_dir: String,
}

/// Which store implementation backs the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_seconds: u64,
}

/// Generative AI provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub timeout_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory
    pub directory: Option<String>,
    pub json: bool,
}

/// View-model tunables for the headless dashboard
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    pub group_capacity: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { group_capacity: 12 }
    }
}

impl Settings {
    /// Load settings from defaults, configuration file and environment variables.
    ///
    /// `PORT` and `API_KEY` are honoured on top of the `EDUCENTER__*` variables.
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.static_dir", defaults.server.static_dir)?
            .set_default("database.backend", "postgres")?
            .set_default("database.url", defaults.database.url)?
            .set_default("database.max_connections", i64::from(defaults.database.max_connections))?
            .set_default("database.min_connections", i64::from(defaults.database.min_connections))?
            .set_default(
                "database.acquire_timeout_seconds",
                defaults.database.acquire_timeout_seconds as i64,
            )?
            .set_default("ai.api_key", defaults.ai.api_key)?
            .set_default("ai.api_url", defaults.ai.api_url)?
            .set_default("ai.model", defaults.ai.model)?
            .set_default("ai.timeout_seconds", defaults.ai.timeout_seconds as i64)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.json", defaults.logging.json)?
            .set_default("dashboard.group_capacity", i64::from(defaults.dashboard.group_capacity))?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("EDUCENTER").separator("__"))
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("ai.api_key", std::env::var("API_KEY").ok())?
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::EduCenterError> {
        super::validation::validate_settings(self)
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> Result<std::net::SocketAddr, crate::utils::errors::EduCenterError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| crate::utils::errors::EduCenterError::Config(format!("Invalid bind address: {}", e)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                static_dir: "dist".to_string(),
            },
            database: DatabaseConfig {
                backend: StoreBackend::Postgres,
                url: "postgresql://localhost/educenter".to_string(),
                max_connections: 10,
                min_connections: 1,
                acquire_timeout_seconds: 30,
            },
            ai: AiConfig {
                api_key: String::new(),
                api_url: "https://generativelanguage.googleapis.com".to_string(),
                model: "gemini-2.0-flash".to_string(),
                timeout_seconds: 60,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
                json: false,
            },
            dashboard: DashboardConfig::default(),
        }
    }
}
