//! Business logic services.
//!
//! The grouping engine lives here; the place CRUD operations that drive it
//! are in [`crate::db::services`] next to the repository abstraction.

pub mod grouping;

pub use grouping::{group_schedule, OpeningGroup};
