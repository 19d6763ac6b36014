//! Axum router configuration with middleware.
//!
//! Routes: `GET /` and `POST /debate`. CORS is fully open so browser frontends on any
//! origin can call the API.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use super::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home))
        .route("/debate", post(handlers::debate))
        .layer(cors)
        .with_state(state)
}
