//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::PlaceRepository;
use crate::models::{Weekday, DAY_ORDER};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for storage operations
    pub repository: Arc<dyn PlaceRepository>,
    /// Canonical week ordering handed to the grouping engine
    pub day_order: [Weekday; 7],
}

impl AppState {
    /// Create a new application state with the given repository and the
    /// canonical Monday-first day ordering.
    pub fn new(repository: Arc<dyn PlaceRepository>) -> Self {
        Self {
            repository,
            day_order: DAY_ORDER,
        }
    }
}
