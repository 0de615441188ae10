//! AI generation handlers

use std::convert::Infallible;
use warp::reply::Response;
use crate::models::{GenerateDescriptionRequest, GeneratePromptRequest, GeneratedText};
use super::{ok_json, server_error, AppState};

const GENERATION_FAILED: &str = "AI generation failed";

/// `POST /api/ai/generate-description`
pub async fn generate_description(
    request: GenerateDescriptionRequest,
    state: AppState,
) -> Result<Response, Infallible> {
    match state.ai.generate_course_description(&request.course_title).await {
        Ok(text) => Ok(ok_json(&GeneratedText { text })),
        Err(e) => Ok(server_error(GENERATION_FAILED, &e)),
    }
}

/// `POST /api/ai/generate-prompt`
pub async fn generate_prompt(
    request: GeneratePromptRequest,
    state: AppState,
) -> Result<Response, Infallible> {
    match state.ai.generate_build_prompt(&request.requirements).await {
        Ok(text) => Ok(ok_json(&GeneratedText { text })),
        Err(e) => Ok(server_error(GENERATION_FAILED, &e)),
    }
}
