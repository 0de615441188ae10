//! HTTP handlers module
//!
//! This module contains the REST handlers organized by resource:
//! - User, course and group list/create handlers
//! - AI text generation handlers
//! - Health check
//!
//! Handlers never reject. Store and provider failures are logged and answered
//! directly with `500 {"error": "<label>"}`.

pub mod ai;
pub mod courses;
pub mod groups;
pub mod health;
pub mod users;

use std::convert::Infallible;
use std::sync::Arc;
use serde::Serialize;
use warp::http::StatusCode;
use warp::reply::{self, Reply, Response};
use warp::Filter;
use crate::database::Store;
use crate::models::ErrorBody;
use crate::services::AiService;
use crate::utils::logging::log_api_error;

/// Largest JSON body accepted by the create endpoints
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Shared handler state. Both members are cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub ai: AiService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, ai: AiService) -> Self {
        Self { store, ai }
    }
}

/// Hand a clone of the state to every request
pub fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

/// Size-limited JSON request body
pub fn json_body<T>() -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone
where
    T: serde::de::DeserializeOwned + Send,
{
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}

/// `200` with a JSON body
pub fn ok_json<T: Serialize>(value: &T) -> Response {
    reply::json(value).into_response()
}

/// JSON error body with the given status
pub fn error_reply(status: StatusCode, label: &str) -> Response {
    let body = ErrorBody { error: label.to_string() };
    reply::with_status(reply::json(&body), status).into_response()
}

/// Log the failure and answer with the endpoint's fixed label
pub fn server_error(label: &str, error: &dyn std::fmt::Display) -> Response {
    log_api_error(label, &error.to_string(), None);
    error_reply(StatusCode::INTERNAL_SERVER_ERROR, label)
}
