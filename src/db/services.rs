//! High-level place operations over the repository trait.
//!
//! These functions are the surface the HTTP layer (and any other caller)
//! uses. They work with any [`PlaceRepository`] implementation.

use tracing::debug;

use super::repository::{PlaceRepository, RepositoryError, RepositoryResult};
use crate::api::{GroupedPlace, PlaceId};
use crate::models::{Place, PlaceDraft, Weekday};
use crate::services::grouping;

/// Persist a batch of new places.
pub async fn save_places(
    repo: &dyn PlaceRepository,
    drafts: Vec<PlaceDraft>,
) -> RepositoryResult<Vec<Place>> {
    debug!(count = drafts.len(), "saving places");
    repo.save_all(drafts).await
}

/// All stored places.
pub async fn list_places(repo: &dyn PlaceRepository) -> RepositoryResult<Vec<Place>> {
    repo.find_all().await
}

/// One place by id, or `NotFound`.
pub async fn get_place(repo: &dyn PlaceRepository, id: PlaceId) -> RepositoryResult<Place> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| RepositoryError::place_not_found(id))
}

/// Full replacement of an existing place: label, location and schedule.
pub async fn update_place(repo: &dyn PlaceRepository, place: Place) -> RepositoryResult<Place> {
    debug!(id = %place.id, "updating place");
    repo.update(place).await
}

/// Delete a place and its schedule.
pub async fn delete_place(repo: &dyn PlaceRepository, id: PlaceId) -> RepositoryResult<()> {
    debug!(%id, "deleting place");
    repo.delete(id).await
}

/// The grouped opening-hours view of one place.
///
/// Read-side transformation: resolves the place, then runs the stateless
/// grouping engine over its schedule with the given day ordering.
pub async fn grouped_opening_hours(
    repo: &dyn PlaceRepository,
    id: PlaceId,
    day_order: &[Weekday],
) -> RepositoryResult<GroupedPlace> {
    let place = get_place(repo, id).await?;
    let groups = grouping::group_schedule(&place.schedule, day_order);

    Ok(GroupedPlace {
        id: place.id,
        label: place.label,
        location: place.location,
        groups,
    })
}

/// Backend reachability check.
pub async fn health_check(repo: &dyn PlaceRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
