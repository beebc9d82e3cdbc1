//! Place domain entities.

use serde::{Deserialize, Serialize};

use super::schedule::DaySchedule;
use crate::api::PlaceId;

/// A persisted place with its weekly schedule.
///
/// A place exclusively owns its schedule; deleting the place deletes the
/// schedule with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub label: String,
    pub location: String,
    pub schedule: DaySchedule,
}

/// A place that has not been persisted yet (no id assigned).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDraft {
    pub label: String,
    pub location: String,
    pub schedule: DaySchedule,
}

impl PlaceDraft {
    pub fn new(
        label: impl Into<String>,
        location: impl Into<String>,
        schedule: DaySchedule,
    ) -> Self {
        Self {
            label: label.into(),
            location: location.into(),
            schedule,
        }
    }

    /// Attach the id assigned by the repository.
    pub fn into_place(self, id: PlaceId) -> Place {
        Place {
            id,
            label: self.label,
            location: self.location,
            schedule: self.schedule,
        }
    }
}
