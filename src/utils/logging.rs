//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the EduCenter application.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{EduCenterError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be held for the
/// lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| EduCenterError::Config(format!("Invalid log filter: {}", e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stdout)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stdout)
            .boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "educenter.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| EduCenterError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a handled HTTP request with structured data
pub fn log_api_request(method: &str, path: &str, status: u16, elapsed_ms: u64) {
    if status >= 500 {
        warn!(
            method = method,
            path = path,
            status = status,
            elapsed_ms = elapsed_ms,
            "Request failed"
        );
    } else {
        info!(
            method = method,
            path = path,
            status = status,
            elapsed_ms = elapsed_ms,
            "Request handled"
        );
    }
}

/// Log store operations
pub fn log_store_operation(operation: &str, table: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Store operation completed"
        );
    } else {
        error!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Store operation failed"
        );
    }
}

/// Log a call to the AI provider
pub fn log_ai_request(template: &str, prompt_chars: usize, success: bool) {
    if success {
        info!(
            template = template,
            prompt_chars = prompt_chars,
            "AI generation completed"
        );
    } else {
        warn!(
            template = template,
            prompt_chars = prompt_chars,
            "AI generation failed"
        );
    }
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}
