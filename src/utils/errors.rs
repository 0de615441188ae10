//! Error handling for EduCenter
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for EduCenter application
#[derive(Error, Debug)]
pub enum EduCenterError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("AI provider error: {0}")]
    Ai(#[from] AiError),

    /// Failure surfaced by the dashboard API client, carrying the fixed label
    /// for the operation that failed.
    #[error("{label}")]
    Client {
        label: &'static str,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Record not found: {entity} {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// AI provider specific errors
#[derive(Error, Debug)]
pub enum AiError {
    #[error("AI provider request failed: {0}")]
    RequestFailed(String),

    #[error("AI provider timeout")]
    Timeout,

    #[error("Invalid AI provider response: {0}")]
    InvalidResponse(String),

    #[error("AI provider returned no text")]
    EmptyResponse,
}

/// Result type alias for EduCenter operations
pub type Result<T> = std::result::Result<T, EduCenterError>;

/// Result type alias for AI provider operations
pub type AiResult<T> = std::result::Result<T, AiError>;

impl EduCenterError {
    /// Build a client error that wraps the underlying transport failure
    pub fn client(label: &'static str, source: reqwest::Error) -> Self {
        EduCenterError::Client { label, source: Some(source) }
    }

    /// Build a client error for a non-success HTTP status
    pub fn client_status(label: &'static str) -> Self {
        EduCenterError::Client { label, source: None }
    }
}
