//! HTTP server
//!
//! Routes `/api/*` to the JSON handlers and every other GET to the static
//! bundle, falling back to `index.html` so the dashboard can route client side.
//! A GET under `/api` that matches no handler gets the bundle too; other
//! methods get `404 {"error"}`.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{debug, info};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};
use crate::handlers::{self, error_reply, json_body, with_state, AppState};
use crate::middleware::{cors, request_logger};
use crate::models::UserQuery;
use crate::utils::errors::{EduCenterError, Result};

/// The whole application: API, static assets, middleware
pub fn routes(
    state: AppState,
    static_dir: PathBuf,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let api_routes = warp::path("api").and(api(state).recover(handle_malformed));

    api_routes
        .or(assets(static_dir))
        .recover(handle_rejection)
        .with(warp::trace::request())
        .with(request_logger())
        .with(cors())
}

/// `/api` subtree, without the prefix
pub fn api(state: AppState) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    let users = warp::path!("users").and(
        warp::get()
            .and(warp::query::<UserQuery>())
            .and(with_state(state.clone()))
            .and_then(handlers::users::list_users)
            .or(warp::post()
                .and(json_body())
                .and(with_state(state.clone()))
                .and_then(handlers::users::create_user))
            .unify(),
    );

    let courses = warp::path!("courses").and(
        warp::get()
            .and(with_state(state.clone()))
            .and_then(handlers::courses::list_courses)
            .or(warp::post()
                .and(json_body())
                .and(with_state(state.clone()))
                .and_then(handlers::courses::create_course))
            .unify(),
    );

    let groups = warp::path!("groups").and(
        warp::get()
            .and(with_state(state.clone()))
            .and_then(handlers::groups::list_groups)
            .or(warp::post()
                .and(json_body())
                .and(with_state(state.clone()))
                .and_then(handlers::groups::create_group))
            .unify(),
    );

    let generate_description = warp::path!("ai" / "generate-description")
        .and(warp::post())
        .and(json_body())
        .and(with_state(state.clone()))
        .and_then(handlers::ai::generate_description);

    let generate_prompt = warp::path!("ai" / "generate-prompt")
        .and(warp::post())
        .and(json_body())
        .and(with_state(state.clone()))
        .and_then(handlers::ai::generate_prompt);

    let health = warp::path!("health")
        .and(warp::get())
        .and(with_state(state))
        .and_then(handlers::health::health);

    users
        .or(courses)
        .unify()
        .or(groups)
        .unify()
        .or(generate_description)
        .unify()
        .or(generate_prompt)
        .unify()
        .or(health)
        .unify()
}

/// Static files under `static_dir`, any other GET answered with its `index.html`
pub fn assets(static_dir: PathBuf) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let index = static_dir.join("index.html");

    warp::get().and(warp::fs::dir(static_dir).or(warp::fs::file(index)))
}

fn is_malformed(rejection: &Rejection) -> bool {
    rejection.find::<warp::filters::body::BodyDeserializeError>().is_some()
        || rejection.find::<warp::reject::PayloadTooLarge>().is_some()
        || rejection.find::<warp::reject::LengthRequired>().is_some()
        || rejection.find::<warp::reject::UnsupportedMediaType>().is_some()
        || rejection.find::<warp::reject::InvalidQuery>().is_some()
}

/// Answers malformed API requests and passes every other rejection on, so an
/// unmatched GET still reaches the static bundle.
pub async fn handle_malformed(rejection: Rejection) -> std::result::Result<Response, Rejection> {
    if is_malformed(&rejection) {
        debug!("Rejected malformed request: {:?}", rejection);
        return Ok(error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Invalid request"));
    }
    Err(rejection)
}

/// Malformed requests share the generic `500 {"error"}` of every other
/// failure; unmatched routes become `404 {"error"}`.
pub async fn handle_rejection(rejection: Rejection) -> std::result::Result<Response, Infallible> {
    if is_malformed(&rejection) {
        debug!("Rejected malformed request: {:?}", rejection);
        return Ok(error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Invalid request"));
    }

    if rejection.is_not_found() || rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(error_reply(StatusCode::NOT_FOUND, "Not found"));
    }

    debug!("Unhandled rejection: {:?}", rejection);
    Ok(error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Invalid request"))
}

/// Bind the server and return the bound address with the future that runs it
/// until `shutdown` resolves.
pub fn bind(
    addr: SocketAddr,
    state: AppState,
    static_dir: PathBuf,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(SocketAddr, impl Future<Output = ()> + Send + 'static)> {
    warp::serve(routes(state, static_dir))
        .try_bind_with_graceful_shutdown(addr, shutdown)
        .map_err(|e| EduCenterError::Config(format!("Failed to bind {}: {}", addr, e)))
}

/// Serve until Ctrl-C
pub async fn serve(addr: SocketAddr, state: AppState, static_dir: impl Into<PathBuf>) -> Result<()> {
    let (bound, server) = bind(addr, state, static_dir.into(), shutdown_signal())?;
    info!("Listening on http://{}", bound);

    server.await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
