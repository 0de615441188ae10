//! Course handlers

use std::convert::Infallible;
use warp::reply::Response;
use crate::models::CreateCourseRequest;
use super::{ok_json, server_error, AppState};

/// `GET /api/courses`
pub async fn list_courses(state: AppState) -> Result<Response, Infallible> {
    match state.store.list_courses().await {
        Ok(courses) => Ok(ok_json(&courses)),
        Err(e) => Ok(server_error("Failed to fetch courses", &e)),
    }
}

/// `POST /api/courses`
pub async fn create_course(request: CreateCourseRequest, state: AppState) -> Result<Response, Infallible> {
    match state.store.create_course(request).await {
        Ok(course) => Ok(ok_json(&course)),
        Err(e) => Ok(server_error("Failed to create course", &e)),
    }
}
