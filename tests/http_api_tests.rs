//! HTTP-level tests for the REST API.
//!
//! Drives the axum router directly with `tower::ServiceExt::oneshot`,
//! asserting on status codes and JSON bodies without binding a socket.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use places_rust::db::{LocalRepository, PlaceRepository};
use places_rust::http::{create_router, AppState};

fn test_router() -> Router {
    let repo = Arc::new(LocalRepository::new()) as Arc<dyn PlaceRepository>;
    create_router(AppState::new(repo))
}

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

fn office_place() -> Value {
    json!({
        "label": "Praxis am See",
        "location": "Seestrasse 12",
        "openingHours": {
            "days": {
                "monday": [{"start": "09:00", "end": "17:00", "type": "open"}],
                "tuesday": [{"start": "09:00", "end": "17:00", "type": "open"}],
                "wednesday": [{"start": "09:00", "end": "17:00", "type": "open"}],
                "thursday": [{"start": "09:00", "end": "17:00", "type": "open"}],
                "friday": [{"start": "09:00", "end": "17:00", "type": "open"}],
                "saturday": [{"start": "09:00", "end": "13:00", "type": "open"}]
            }
        }
    })
}

#[tokio::test]
async fn test_home_banner() {
    let router = test_router();
    let (status, body) = send(&router, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("Places API - Home!".to_string()));
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = test_router();
    let (status, body) = send(&router, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_create_and_fetch_place() {
    let router = test_router();

    let (status, created) =
        send(&router, Method::POST, "/places", Some(json!([office_place()]))).await;
    assert_eq!(status, StatusCode::OK);
    let id = created[0]["id"].as_i64().unwrap();
    assert_eq!(created[0]["label"], "Praxis am See");

    let (status, fetched) =
        send(&router, Method::GET, &format!("/places/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["location"], "Seestrasse 12");
    assert_eq!(
        fetched["openingHours"]["days"]["monday"][0]["start"],
        "09:00"
    );
}

#[tokio::test]
async fn test_create_rejects_empty_list() {
    let router = test_router();
    let (status, body) = send(&router, Method::POST, "/places", Some(json!([]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["message"], "Provide at least one location.");
}

#[tokio::test]
async fn test_create_rejects_bad_time_format() {
    let router = test_router();
    let mut place = office_place();
    place["openingHours"]["days"]["monday"][0]["start"] = json!("9:00");

    let (status, body) = send(&router, Method::POST, "/places", Some(json!([place]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Start time must be in format HH:mm"));
}

#[tokio::test]
async fn test_create_rejects_reversed_interval() {
    let router = test_router();
    let mut place = office_place();
    place["openingHours"]["days"]["monday"][0]["start"] = json!("17:00");
    place["openingHours"]["days"]["monday"][0]["end"] = json!("09:00");

    let (status, body) = send(&router, Method::POST, "/places", Some(json!([place]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Start time must be before end time"));
}

#[tokio::test]
async fn test_create_accepts_day_aliases() {
    let router = test_router();
    let place = json!({
        "label": "Kiosk",
        "location": "Platz 2",
        "opening_hours": {
            "days": {
                "MON": [{"start": "08:00", "end": "12:00", "type": "open"}],
                "Saturday": [{"start": "08:00", "end": "12:00", "type": "open"}]
            }
        }
    });

    let (status, created) = send(&router, Method::POST, "/places", Some(json!([place]))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(created[0]["openingHours"]["days"]["monday"].is_array());
    assert!(created[0]["openingHours"]["days"]["saturday"].is_array());
}

#[tokio::test]
async fn test_fetch_missing_place_is_404() {
    let router = test_router();
    let (status, body) = send(&router, Method::GET, "/places/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains("Place not found: 42"));
}

#[tokio::test]
async fn test_list_places() {
    let router = test_router();
    send(&router, Method::POST, "/places", Some(json!([office_place()]))).await;

    let (status, listed) = send(&router, Method::GET, "/places", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_requires_id() {
    let router = test_router();
    let (status, body) = send(&router, Method::PUT, "/places", Some(office_place())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("id is required"));
}

#[tokio::test]
async fn test_update_replaces_place() {
    let router = test_router();
    let (_, created) =
        send(&router, Method::POST, "/places", Some(json!([office_place()]))).await;
    let id = created[0]["id"].as_i64().unwrap();

    let replacement = json!({
        "id": id,
        "label": "Praxis am Berg",
        "location": "Bergweg 3",
        "openingHours": {
            "days": {
                "sunday": [{"start": "10:00", "end": "14:00", "type": "open"}]
            }
        }
    });

    let (status, updated) = send(&router, Method::PUT, "/places", Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["label"], "Praxis am Berg");

    let (_, fetched) = send(&router, Method::GET, &format!("/places/{}", id), None).await;
    assert_eq!(fetched["location"], "Bergweg 3");
    assert!(fetched["openingHours"]["days"]["monday"].is_null());
    assert!(fetched["openingHours"]["days"]["sunday"].is_array());
}

#[tokio::test]
async fn test_update_missing_place_is_404() {
    let router = test_router();
    let mut place = office_place();
    place["id"] = json!(999);

    let (status, _) = send(&router, Method::PUT, "/places", Some(place)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_place() {
    let router = test_router();
    let (_, created) =
        send(&router, Method::POST, "/places", Some(json!([office_place()]))).await;
    let id = created[0]["id"].as_i64().unwrap();

    let (status, body) = send(&router, Method::DELETE, &format!("/places/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("Place deleted successfully".to_string()));

    let (status, _) = send(&router, Method::GET, &format!("/places/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, Method::DELETE, &format!("/places/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_grouped_view_wire_shape() {
    let router = test_router();
    let (_, created) =
        send(&router, Method::POST, "/places", Some(json!([office_place()]))).await;
    let id = created[0]["id"].as_i64().unwrap();

    let (status, grouped) = send(
        &router,
        Method::GET,
        &format!("/places/{}/opening-hours/grouped", id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(grouped["id"].as_i64().unwrap(), id);
    assert_eq!(grouped["label"], "Praxis am See");

    let groups = grouped["openingHours"].as_array().unwrap();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0]["day"], "Monday - Friday");
    assert_eq!(groups[0]["intervals"], json!(["09:00 - 17:00"]));
    assert_eq!(groups[1]["day"], "Saturday");
    assert_eq!(groups[1]["intervals"], json!(["09:00 - 13:00"]));
    assert_eq!(groups[2]["day"], "Sunday");
    assert_eq!(groups[2]["intervals"], json!(["closed"]));
}

#[tokio::test]
async fn test_grouped_view_missing_place_is_404() {
    let router = test_router();
    let (status, body) = send(
        &router,
        Method::GET,
        "/places/7/opening-hours/grouped",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}
