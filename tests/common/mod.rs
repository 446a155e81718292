// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use std::sync::Arc;
use track_my_run::config::Config;
use track_my_run::db::{InMemoryRunStore, RunStore};
use track_my_run::routes::create_router;
use track_my_run::AppState;

/// Create a test app around an in-memory store.
/// Returns the router and the store so tests can inspect what was recorded.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<InMemoryRunStore>) {
    let store = Arc::new(InMemoryRunStore::new());
    let app = create_test_app_with_store(store.clone());
    (app, store)
}

/// Create a test app around any store.
#[allow(dead_code)]
pub fn create_test_app_with_store(store: Arc<dyn RunStore>) -> axum::Router {
    let state = Arc::new(AppState::with_store(Config::test_default(), store));
    create_router(state)
}

/// Build a `POST /runs` request with a JSON body.
#[allow(dead_code)]
pub fn submit_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/runs")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

/// Build a body-less `GET` request.
#[allow(dead_code)]
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// JSON payload for a run on 2013-02-03.
#[allow(dead_code)]
pub fn run_json(distance_km: f64, hours: i64, minutes: i64, seconds: i64) -> String {
    serde_json::json!({
        "date": "2013-02-03",
        "distanceKm": distance_km,
        "duration": { "hours": hours, "minutes": minutes, "seconds": seconds },
    })
    .to_string()
}

/// Collect a response body as UTF-8 text.
#[allow(dead_code)]
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
