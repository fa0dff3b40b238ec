//! Tests for `AppError` to HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use brushquote_api::error::AppError;
use brushquote_core::error::CoreError;
use http_body_util::BodyExt;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("doorHeight: range".into()));
    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "doorHeight: range");
}

#[tokio::test]
async fn import_error_returns_422() {
    let err = AppError::Core(CoreError::Import("bad document".into()));
    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "IMPORT_ERROR");
}

#[tokio::test]
async fn bad_request_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("missing entity".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Engine errors produced by real operations map to their documented codes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rejected_settings_patch_maps_to_validation_error() {
    use brushquote_core::settings::{CalculationSettings, CalculationSettingsPatch};

    let patch = CalculationSettingsPatch {
        door_height: Some(-2.0),
        ..Default::default()
    };
    let err = CalculationSettings::default().apply_patch(&patch).unwrap_err();
    let (status, json) = error_to_response(AppError::from(err)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("door_height"));
}

#[tokio::test]
async fn malformed_import_maps_to_import_error() {
    use brushquote_core::import::import_project_json;
    use brushquote_core::{CalculationSettings, PricingSettings};

    let err = import_project_json(
        "{\"project\": 42}",
        &CalculationSettings::default(),
        &PricingSettings::default(),
    )
    .unwrap_err();
    let (status, json) = error_to_response(AppError::from(err)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "IMPORT_ERROR");
}
