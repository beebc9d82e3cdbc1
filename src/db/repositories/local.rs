//! In-memory repository for unit testing and local development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::PlaceId;
use crate::db::repository::{PlaceRepository, RepositoryError, RepositoryResult};
use crate::models::{Place, PlaceDraft};

/// In-memory place store.
///
/// Cloning is cheap and clones share the same underlying storage, so a
/// repository handle can be passed freely across tasks.
#[derive(Clone)]
pub struct LocalRepository {
    places: Arc<RwLock<HashMap<i64, Place>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            places: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    fn allocate_id(&self) -> PlaceId {
        PlaceId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

#[async_trait]
impl PlaceRepository for LocalRepository {
    async fn save_all(&self, drafts: Vec<PlaceDraft>) -> RepositoryResult<Vec<Place>> {
        let mut saved = Vec::with_capacity(drafts.len());
        let mut places = self.places.write();
        for draft in drafts {
            let place = draft.into_place(self.allocate_id());
            places.insert(place.id.value(), place.clone());
            saved.push(place);
        }
        Ok(saved)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Place>> {
        let mut all: Vec<Place> = self.places.read().values().cloned().collect();
        all.sort_by_key(|place| place.id);
        Ok(all)
    }

    async fn find_by_id(&self, id: PlaceId) -> RepositoryResult<Option<Place>> {
        Ok(self.places.read().get(&id.value()).cloned())
    }

    async fn update(&self, place: Place) -> RepositoryResult<Place> {
        let mut places = self.places.write();
        match places.get_mut(&place.id.value()) {
            Some(stored) => {
                *stored = place.clone();
                Ok(place)
            }
            None => Err(RepositoryError::place_not_found(place.id)),
        }
    }

    async fn delete(&self, id: PlaceId) -> RepositoryResult<()> {
        match self.places.write().remove(&id.value()) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::place_not_found(id)),
        }
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DaySchedule;

    fn draft(label: &str) -> PlaceDraft {
        PlaceDraft::new(label, "Somewhere 1", DaySchedule::new())
    }

    #[tokio::test]
    async fn test_save_all_assigns_sequential_ids() {
        let repo = LocalRepository::new();
        let saved = repo
            .save_all(vec![draft("a"), draft("b"), draft("c")])
            .await
            .unwrap();

        assert_eq!(saved.len(), 3);
        assert_eq!(saved[0].id.value(), 1);
        assert_eq!(saved[1].id.value(), 2);
        assert_eq!(saved[2].id.value(), 3);
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_id() {
        let repo = LocalRepository::new();
        repo.save_all(vec![draft("a"), draft("b")]).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].id < all[1].id);
    }

    #[tokio::test]
    async fn test_update_missing_place_is_not_found() {
        let repo = LocalRepository::new();
        let ghost = draft("ghost").into_place(PlaceId::new(99));

        let err = repo.update(ghost).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_place() {
        let repo = LocalRepository::new();
        let saved = repo.save_all(vec![draft("a")]).await.unwrap();
        let id = saved[0].id;

        repo.delete(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(repo.delete(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = LocalRepository::new();
        let clone = repo.clone();
        repo.save_all(vec![draft("shared")]).await.unwrap();

        assert_eq!(clone.find_all().await.unwrap().len(), 1);
    }
}
