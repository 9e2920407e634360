//! End-to-end tests for the REST gateway against an in-process stub server.
//!
//! Each test spins up a small axum app on an ephemeral port that plays the
//! staff-directory service, then drives it through [`RestLocationGateway`]
//! over real TCP.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use staffdir_adapter_http_reqwest::{GatewayConfig, RestLocationGateway};
use staffdir_app::ports::LocationGateway;
use staffdir_domain::error::StaffDirError;
use staffdir_domain::id::LocationId;
use staffdir_domain::location::Location;
use staffdir_domain::sort::{SortDirection, SortField, SortSpec};

#[derive(Clone, Default)]
struct StubState {
    queries: Arc<Mutex<Vec<String>>>,
    bodies: Arc<Mutex<Vec<serde_json::Value>>>,
}

fn canned_locations() -> Vec<Location> {
    vec![
        Location::builder()
            .id(LocationId::new(2))
            .city("Berlin")
            .build(),
        Location::builder()
            .id(LocationId::new(1))
            .city("Amsterdam")
            .build(),
    ]
}

async fn list(State(state): State<StubState>, RawQuery(query): RawQuery) -> Json<Vec<Location>> {
    state.queries.lock().unwrap().push(query.unwrap_or_default());
    Json(canned_locations())
}

async fn create(State(state): State<StubState>, Json(body): Json<serde_json::Value>) -> Response {
    state.bodies.lock().unwrap().push(body.clone());
    let mut created = body;
    created["id"] = serde_json::json!(101);
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn get_one(Path(id): Path<i64>) -> Response {
    if id == 404 {
        let body = serde_json::json!({
            "title": "Not Found",
            "detail": "location 404 not found",
        });
        return (StatusCode::NOT_FOUND, Json(body)).into_response();
    }
    let location = Location::builder()
        .id(LocationId::new(id))
        .city("Lyon")
        .build();
    Json(location).into_response()
}

async fn put_one(
    State(state): State<StubState>,
    Path(id): Path<i64>,
    Json(body): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    state.bodies.lock().unwrap().push(body.clone());
    let mut updated = body;
    updated["id"] = serde_json::json!(id);
    Json(updated)
}

async fn delete_one(Path(_id): Path<i64>) -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Bind the stub app to an ephemeral port and return its base URL.
async fn spawn_stub() -> (String, StubState) {
    let state = StubState::default();
    let app = axum::Router::new()
        .route(
            "/services/employee/api/locations",
            get(list).post(create),
        )
        .route(
            "/services/employee/api/locations/{id}",
            get(get_one).put(put_one).patch(put_one).delete(delete_one),
        )
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("bound socket has an address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server runs");
    });

    (format!("http://{addr}"), state)
}

async fn spawn_gateway() -> (RestLocationGateway, StubState) {
    let (url, state) = spawn_stub().await;
    let gateway = GatewayConfig {
        base_url: url,
        service: "employee".to_string(),
        connect_timeout: Duration::from_secs(5),
    }
    .build()
    .expect("client builds");
    (gateway, state)
}

#[tokio::test]
async fn should_fetch_list_and_append_cache_buster() {
    let (gateway, state) = spawn_gateway().await;

    let locations = gateway.list(None).await.unwrap();

    assert_eq!(locations, canned_locations());
    let queries = state.queries.lock().unwrap();
    assert!(queries[0].contains("cacheBuster="));
    assert!(!queries[0].contains("sort="));
}

#[tokio::test]
async fn should_send_sort_parameter_when_spec_given() {
    let (gateway, state) = spawn_gateway().await;
    let spec = SortSpec::new(SortField::City, SortDirection::Asc);

    gateway.list(Some(&spec)).await.unwrap();

    let queries = state.queries.lock().unwrap();
    assert!(queries[0].contains("sort=city,asc"));
    assert!(queries[0].contains("cacheBuster="));
}

#[tokio::test]
async fn should_fetch_single_record_by_id() {
    let (gateway, _state) = spawn_gateway().await;

    let location = gateway.get(LocationId::new(7)).await.unwrap();

    assert_eq!(location.id, Some(LocationId::new(7)));
    assert_eq!(location.city.as_deref(), Some("Lyon"));
}

#[tokio::test]
async fn should_normalize_error_body_into_api_error() {
    let (gateway, _state) = spawn_gateway().await;

    let result = gateway.get(LocationId::new(404)).await;

    match result {
        Err(StaffDirError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "location 404 not found");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn should_post_payload_without_absent_fields() {
    let (gateway, state) = spawn_gateway().await;
    let location = Location::builder().city("Springfield").build();

    let created = gateway.create(location).await.unwrap();

    assert_eq!(created.id, Some(LocationId::new(101)));
    let bodies = state.bodies.lock().unwrap();
    assert_eq!(bodies[0], serde_json::json!({"city": "Springfield"}));
}

#[tokio::test]
async fn should_put_full_payload_on_update() {
    let (gateway, state) = spawn_gateway().await;
    let location = Location::builder()
        .id(LocationId::new(5))
        .city("Lyon")
        .build();

    let updated = gateway.update(LocationId::new(5), location).await.unwrap();

    assert_eq!(updated.id, Some(LocationId::new(5)));
    let bodies = state.bodies.lock().unwrap();
    assert_eq!(bodies[0], serde_json::json!({"id": 5, "city": "Lyon"}));
}

#[tokio::test]
async fn should_treat_empty_delete_body_as_empty_record() {
    let (gateway, _state) = spawn_gateway().await;

    let deleted = gateway.delete(LocationId::new(5)).await.unwrap();

    assert!(deleted.is_empty());
}
