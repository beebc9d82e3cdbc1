//! Repository trait for place storage backends.

use async_trait::async_trait;

use crate::api::PlaceId;
use crate::models::{Place, PlaceDraft};

pub mod error;

pub use error::{RepositoryError, RepositoryResult};

/// Storage abstraction for places and their schedules.
///
/// Implementations must be `Send + Sync` to work with async Rust. The
/// consistency discipline (transactions, isolation) is the implementation's
/// responsibility; callers always receive fully loaded places.
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Persist a batch of new places, assigning ids in input order.
    async fn save_all(&self, drafts: Vec<PlaceDraft>) -> RepositoryResult<Vec<Place>>;

    /// All stored places, ordered by id.
    async fn find_all(&self) -> RepositoryResult<Vec<Place>>;

    /// Look up one place. `Ok(None)` when the id is unknown.
    async fn find_by_id(&self, id: PlaceId) -> RepositoryResult<Option<Place>>;

    /// Replace label, location and the whole schedule of an existing place.
    ///
    /// Returns `NotFound` when the id does not exist.
    async fn update(&self, place: Place) -> RepositoryResult<Place>;

    /// Delete a place and its schedule. `NotFound` when the id is unknown.
    async fn delete(&self, id: PlaceId) -> RepositoryResult<()>;

    /// Backend reachability check.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
