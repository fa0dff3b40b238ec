//! HTTP-level integration tests for `/settings`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with, get, post_json, put_json, test_state};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: GET returns built-in defaults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn defaults_are_served() {
    let json = body_json(get(build_test_app(), "/api/v1/settings/calculation").await).await;
    assert_eq!(json["data"]["doorHeight"], 7.0);
    assert_eq!(json["data"]["singleClosetWidth"], 2.5);

    let json = body_json(get(build_test_app(), "/api/v1/settings/pricing").await).await;
    assert_eq!(json["data"]["wallCoverage"], 350.0);
    assert_eq!(json["data"]["secondCoatLaborMultiplier"], 2.0);
}

// ---------------------------------------------------------------------------
// Test: PUT applies a patch and later estimates see it
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pricing_patch_applies_to_later_estimates() {
    let state = test_state();

    let response = put_json(
        build_test_app_with(state.clone()),
        "/api/v1/settings/pricing",
        json!({ "wallLaborPerSqft": 2.0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["wallLaborPerSqft"], 2.0);
    assert_eq!(json["data"]["ceilingLaborPerSqft"], 1.75);

    let entity = json!({
        "kind": "brickWallSurface",
        "id": "b",
        "manualArea": 100,
        "coats": { "walls": 1 }
    });
    let json = body_json(
        post_json(
            build_test_app_with(state),
            "/api/v1/estimates/entity",
            json!({ "entity": entity }),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["summary"]["labor"]["walls"], 200.0);
}

// ---------------------------------------------------------------------------
// Test: invalid patches are rejected and change nothing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn negative_values_are_rejected() {
    let state = test_state();

    let response = put_json(
        build_test_app_with(state.clone()),
        "/api/v1/settings/calculation",
        json!({ "doorHeight": -1.0, "doorWidth": 4.0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let json = body_json(get(build_test_app_with(state), "/api/v1/settings/calculation").await).await;
    assert_eq!(json["data"]["doorWidth"], 3.0);
}

#[tokio::test]
async fn coverage_below_floor_is_rejected() {
    let response = put_json(
        build_test_app(),
        "/api/v1/settings/pricing",
        json!({ "trimCoverage": 0.0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Test: reset restores defaults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reset_restores_defaults() {
    let state = test_state();

    put_json(
        build_test_app_with(state.clone()),
        "/api/v1/settings/calculation",
        json!({ "closetCavityDepth": 3.0 }),
    )
    .await;
    let response = post_json(
        build_test_app_with(state.clone()),
        "/api/v1/settings/calculation/reset",
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(build_test_app_with(state), "/api/v1/settings/calculation").await).await;
    assert_eq!(json["data"]["closetCavityDepth"], 2.0);
}
