//! Health check handler

use std::convert::Infallible;
use serde_json::json;
use warp::reply::Response;
use super::{ok_json, server_error, AppState};

/// `GET /api/health`; pings the store
pub async fn health(state: AppState) -> Result<Response, Infallible> {
    match state.store.health_check().await {
        Ok(()) => Ok(ok_json(&json!({ "status": "ok" }))),
        Err(e) => Ok(server_error("Health check failed", &e)),
    }
}
