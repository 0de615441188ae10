//! HTTP middleware
//!
//! Cross-cutting filters wrapped around every route.

pub mod logging;

pub use logging::request_logger;

/// CORS policy of the API: any origin, JSON requests
pub fn cors() -> warp::cors::Builder {
    warp::cors()
        .allow_any_origin()
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}
