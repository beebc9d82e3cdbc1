//! HTTP server module.
//!
//! An axum-based REST API over the place service layer. Request parsing,
//! validation messages and JSON mapping live here; business logic stays in
//! the service and repository layers.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
