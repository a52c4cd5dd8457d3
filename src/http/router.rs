//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, tracing), and
//! creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
///
/// CORS is fully permissive: every response carries
/// `Access-Control-Allow-Origin: *` and OPTIONS preflights succeed.
/// Non-POST requests to the fortune route get a 405 from axum's method
/// routing.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new().route("/fortune", post(handlers::fortune));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
