//! Group handlers
//!
//! List and create both answer with [`GroupWithRelations`](crate::models::GroupWithRelations),
//! so a created group has exactly the shape it will later be listed with.

use std::convert::Infallible;
use warp::reply::Response;
use crate::models::CreateGroupRequest;
use super::{ok_json, server_error, AppState};

/// `GET /api/groups`
pub async fn list_groups(state: AppState) -> Result<Response, Infallible> {
    match state.store.list_groups().await {
        Ok(groups) => Ok(ok_json(&groups)),
        Err(e) => Ok(server_error("Failed to fetch groups", &e)),
    }
}

/// `POST /api/groups`
pub async fn create_group(request: CreateGroupRequest, state: AppState) -> Result<Response, Infallible> {
    tracing::debug!(students = request.student_ids.len(), "Creating group");

    match state.store.create_group(request).await {
        Ok(group) => Ok(ok_json(&group)),
        Err(e) => Ok(server_error("Failed to create group", &e)),
    }
}
