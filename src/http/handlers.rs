//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use super::dto::{GroupedPlaceDto, HealthResponse, PlaceDto};
use super::error::AppError;
use super::state::AppState;
use crate::api::PlaceId;
use crate::db::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /
///
/// Home banner.
pub async fn home() -> &'static str {
    "Places API - Home!"
}

/// GET /health
///
/// Health check endpoint to verify the service and its storage backend.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

/// POST /places
///
/// Create a batch of places from a non-empty list of validated records.
pub async fn save_places(
    State(state): State<AppState>,
    Json(records): Json<Vec<PlaceDto>>,
) -> HandlerResult<Vec<PlaceDto>> {
    if records.is_empty() {
        return Err(AppError::BadRequest(
            "Provide at least one location.".to_string(),
        ));
    }
    reject_invalid(&records)?;

    let drafts = records.iter().map(PlaceDto::to_draft).collect();
    let saved = services::save_places(state.repository.as_ref(), drafts).await?;
    info!(count = saved.len(), "places created");

    Ok(Json(saved.iter().map(PlaceDto::from).collect()))
}

/// GET /places
///
/// List all places.
pub async fn list_places(State(state): State<AppState>) -> HandlerResult<Vec<PlaceDto>> {
    let places = services::list_places(state.repository.as_ref()).await?;
    Ok(Json(places.iter().map(PlaceDto::from).collect()))
}

/// GET /places/{id}
///
/// Fetch one place by id.
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<PlaceDto> {
    let place = services::get_place(state.repository.as_ref(), PlaceId::new(id)).await?;
    Ok(Json(PlaceDto::from(&place)))
}

/// PUT /places
///
/// Fully replace an existing place: label, location and opening hours.
pub async fn update_place(
    State(state): State<AppState>,
    Json(record): Json<PlaceDto>,
) -> HandlerResult<PlaceDto> {
    reject_invalid(std::slice::from_ref(&record))?;
    let place = record
        .to_place()
        .ok_or_else(|| AppError::BadRequest("Place id is required for updates".to_string()))?;

    let updated = services::update_place(state.repository.as_ref(), place).await?;
    info!(id = %updated.id, "place updated");

    Ok(Json(PlaceDto::from(&updated)))
}

/// DELETE /places/{id}
///
/// Delete a place and its schedule.
pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<String, AppError> {
    services::delete_place(state.repository.as_ref(), PlaceId::new(id)).await?;
    info!(id, "place deleted");
    Ok("Place deleted successfully".to_string())
}

/// GET /places/{id}/opening-hours/grouped
///
/// The grouped opening-hours view of one place.
pub async fn grouped_opening_hours(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<GroupedPlaceDto> {
    let grouped = services::grouped_opening_hours(
        state.repository.as_ref(),
        PlaceId::new(id),
        &state.day_order,
    )
    .await?;

    Ok(Json(GroupedPlaceDto::from(grouped)))
}

/// Collect validation messages across all records; non-empty ⇒ 400.
fn reject_invalid(records: &[PlaceDto]) -> Result<(), AppError> {
    let errors: Vec<String> = records.iter().flat_map(PlaceDto::validate).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::BadRequest(errors.join("; ")))
    }
}
