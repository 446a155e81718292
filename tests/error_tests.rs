// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use track_my_run::db::StoreError;
use track_my_run::error::AppError;
use track_my_run::services::IngestError;

#[test]
fn test_malformed_input_maps_to_bad_request() {
    let err: AppError = IngestError::MalformedInput("expected value".to_string()).into();

    assert!(matches!(&err, AppError::BadRequest(msg) if msg == "expected value"));
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_storage_unavailable_maps_to_server_error() {
    let err: AppError =
        IngestError::Storage(StoreError::StorageUnavailable("disk full".to_string())).into();

    assert!(matches!(&err, AppError::StorageUnavailable(_)));
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_internal_maps_to_server_error() {
    let err = AppError::from(anyhow::anyhow!("boom"));
    assert_eq!(
        err.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
