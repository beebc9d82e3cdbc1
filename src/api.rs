//! Public API surface.
//!
//! Consolidates the identifier newtype and the derived view types exposed to
//! callers of the library and the HTTP layer.

use serde::{Deserialize, Serialize};

pub use crate::services::grouping::OpeningGroup;

/// Place identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlaceId(pub i64);

impl PlaceId {
    pub fn new(value: i64) -> Self {
        PlaceId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PlaceId> for i64 {
    fn from(id: PlaceId) -> Self {
        id.0
    }
}

/// Grouped opening-hours view of one place. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedPlace {
    pub id: PlaceId,
    pub label: String,
    pub location: String,
    pub groups: Vec<OpeningGroup>,
}
