//! Logging middleware
//!
//! Emits one structured tracing event per HTTP request.

use warp::log::{Info, Log};
use crate::utils::logging::log_api_request;

/// Request logger to attach with `Filter::with`
pub fn request_logger() -> Log<impl Fn(Info<'_>) + Copy + Send + Sync> {
    warp::log::custom(|info: Info<'_>| {
        log_api_request(
            info.method().as_str(),
            info.path(),
            info.status().as_u16(),
            info.elapsed().as_millis() as u64,
        );
    })
}
