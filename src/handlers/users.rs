//! User handlers

use std::convert::Infallible;
use warp::reply::Response;
use crate::models::{CreateUserRequest, UserQuery};
use super::{ok_json, server_error, AppState};

const FETCH_FAILED: &str = "Failed to fetch users";
const CREATE_FAILED: &str = "Failed to create user";

/// `GET /api/users[?role=STUDENT|TEACHER]`
pub async fn list_users(query: UserQuery, state: AppState) -> Result<Response, Infallible> {
    let role = match query.role() {
        Ok(role) => role,
        Err(e) => return Ok(server_error(FETCH_FAILED, &e)),
    };

    match state.store.list_users(role).await {
        Ok(users) => Ok(ok_json(&users)),
        Err(e) => Ok(server_error(FETCH_FAILED, &e)),
    }
}

/// `POST /api/users`; id and joinedAt are assigned by the store
pub async fn create_user(request: CreateUserRequest, state: AppState) -> Result<Response, Infallible> {
    tracing::debug!(role = %request.role, "Creating user");

    match state.store.create_user(request).await {
        Ok(user) => Ok(ok_json(&user)),
        Err(e) => Ok(server_error(CREATE_FAILED, &e)),
    }
}
