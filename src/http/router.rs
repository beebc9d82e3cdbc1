//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        // Place CRUD
        .route("/places", post(handlers::save_places))
        .route("/places", get(handlers::list_places))
        .route("/places", put(handlers::update_place))
        .route("/places/{id}", get(handlers::find_by_id))
        .route("/places/{id}", delete(handlers::delete_by_id))
        // Derived grouped view
        .route(
            "/places/{id}/opening-hours/grouped",
            get(handlers::grouped_opening_hours),
        )
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
