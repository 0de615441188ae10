//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use tracing::warn;
use crate::utils::errors::{EduCenterError, Result};
use super::{Settings, StoreBackend};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_ai_config(&settings.ai)?;
    validate_logging_config(&settings.logging)?;
    validate_dashboard_config(&settings.dashboard)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(EduCenterError::Config(
            "Server host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(EduCenterError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    if config.static_dir.is_empty() {
        return Err(EduCenterError::Config(
            "Static directory is required".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.backend == StoreBackend::Memory {
        return Ok(());
    }

    if config.url.is_empty() {
        return Err(EduCenterError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(EduCenterError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(EduCenterError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    Ok(())
}

/// Validate AI provider configuration
fn validate_ai_config(config: &super::AiConfig) -> Result<()> {
    if config.api_url.is_empty() {
        return Err(EduCenterError::Config(
            "AI API URL is required".to_string()
        ));
    }

    if config.model.is_empty() {
        return Err(EduCenterError::Config(
            "AI model is required".to_string()
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(EduCenterError::Config(
            "AI timeout must be greater than 0".to_string()
        ));
    }

    // The AI endpoints answer with the generic failure when the key is missing.
    if config.api_key.is_empty() {
        warn!("AI API key is not configured; generation endpoints will fail");
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EduCenterError::Config(
            "Log level is required".to_string()
        ));
    }

    // Same parser the subscriber uses, so per-target directives are accepted
    if let Err(e) = tracing_subscriber::EnvFilter::try_new(&config.level) {
        return Err(EduCenterError::Config(
            format!("Invalid log level: {}: {}", config.level, e)
        ));
    }

    Ok(())
}

fn validate_dashboard_config(config: &super::DashboardConfig) -> Result<()> {
    if config.group_capacity == 0 {
        return Err(EduCenterError::Config(
            "Group capacity must be greater than 0".to_string()
        ));
    }

    Ok(())
}
