//! Data Transfer Objects for the HTTP API.
//!
//! Wire shape of a place record:
//!
//! ```json
//! {
//!   "id": 1,
//!   "label": "Coffee Corner",
//!   "location": "Bahnhofstrasse 1",
//!   "openingHours": {
//!     "days": {
//!       "monday": [{"start": "09:00", "end": "17:00", "type": "open"}]
//!     }
//!   }
//! }
//! ```
//!
//! `opening_hours` is accepted as an alias of `openingHours`; day keys accept
//! full names and 3-letter abbreviations in any case.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::api::{GroupedPlace, OpeningGroup, PlaceId};
use crate::models::{DaySchedule, Interval, Place, PlaceDraft, Weekday};
use crate::validation::{
    interval_order_is_valid, time_format_is_valid, MSG_INTERVAL_ORDER, MSG_TIME_FORMAT,
};

/// One opening interval on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenIntervalDto {
    pub start: String,
    pub end: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The per-day interval map on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHoursDto {
    pub days: BTreeMap<Weekday, Vec<OpenIntervalDto>>,
}

/// A place record for create/read/update requests and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub label: String,
    pub location: String,
    #[serde(rename = "openingHours", alias = "opening_hours")]
    pub opening_hours: OpeningHoursDto,
}

/// The grouped opening-hours view of one place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedPlaceDto {
    pub id: i64,
    pub label: String,
    pub location: String,
    #[serde(rename = "openingHours", alias = "opening_hours")]
    pub opening_hours: Vec<OpeningGroup>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage backend status
    pub database: String,
}

impl OpenIntervalDto {
    fn to_interval(&self) -> Interval {
        Interval::new(self.start.clone(), self.end.clone(), self.kind.clone())
    }

    fn from_interval(interval: &Interval) -> Self {
        Self {
            start: interval.start.clone(),
            end: interval.end.clone(),
            kind: interval.kind.clone(),
        }
    }
}

impl PlaceDto {
    /// Collect every field-validation message for this record.
    ///
    /// Mirrors the write-side rules: required fields, `HH:mm` time format,
    /// and the start/end ordering check applied per interval. An empty result
    /// means the record is acceptable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.label.trim().is_empty() {
            errors.push("Label is mandatory".to_string());
        }
        if self.location.trim().is_empty() {
            errors.push("Location is mandatory".to_string());
        }
        if self.opening_hours.days.is_empty() {
            errors.push("Days map cannot be empty".to_string());
        }

        for intervals in self.opening_hours.days.values() {
            if intervals.is_empty() {
                errors.push("Interval list cannot be empty".to_string());
            }
            for interval in intervals {
                if interval.start.trim().is_empty() {
                    errors.push("Start time is required".to_string());
                }
                if interval.end.trim().is_empty() {
                    errors.push("End time is required".to_string());
                }
                if interval.kind.trim().is_empty() {
                    errors.push("Type is required".to_string());
                }
                if !time_format_is_valid(&interval.start) || !time_format_is_valid(&interval.end) {
                    errors.push(MSG_TIME_FORMAT.to_string());
                }
                if !interval_order_is_valid(&interval.to_interval()) {
                    errors.push(MSG_INTERVAL_ORDER.to_string());
                }
            }
        }

        errors
    }

    fn to_schedule(&self) -> DaySchedule {
        self.opening_hours
            .days
            .iter()
            .map(|(day, intervals)| {
                (
                    *day,
                    intervals.iter().map(OpenIntervalDto::to_interval).collect(),
                )
            })
            .collect()
    }

    /// Convert to a draft for creation (any provided id is ignored).
    pub fn to_draft(&self) -> PlaceDraft {
        PlaceDraft::new(self.label.clone(), self.location.clone(), self.to_schedule())
    }

    /// Convert to a full place for updates; `None` when no id is present.
    pub fn to_place(&self) -> Option<Place> {
        self.id.map(|id| Place {
            id: PlaceId::new(id),
            label: self.label.clone(),
            location: self.location.clone(),
            schedule: self.to_schedule(),
        })
    }
}

impl From<&Place> for PlaceDto {
    fn from(place: &Place) -> Self {
        let days = place
            .schedule
            .days()
            .map(|(day, intervals)| {
                (
                    day,
                    intervals.iter().map(OpenIntervalDto::from_interval).collect(),
                )
            })
            .collect();

        Self {
            id: Some(place.id.value()),
            label: place.label.clone(),
            location: place.location.clone(),
            opening_hours: OpeningHoursDto { days },
        }
    }
}

impl From<GroupedPlace> for GroupedPlaceDto {
    fn from(grouped: GroupedPlace) -> Self {
        Self {
            id: grouped.id.value(),
            label: grouped.label,
            location: grouped.location,
            opening_hours: grouped.groups,
        }
    }
}
