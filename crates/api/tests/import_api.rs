//! HTTP-level integration tests for `/projects/import`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, post_json, post_raw};
use serde_json::json;

fn document() -> serde_json::Value {
    json!({
        "project": {
            "id": "p1",
            "name": "Maple Street",
            "quoteBuilder": { "name": "Interior", "ceilings": false }
        },
        "entities": [
            {
                "kind": "room",
                "id": "living",
                "length": 12,
                "width": 10,
                "height": 8,
                "doorCount": 1,
                "windowCount": 1
            },
            {
                "kind": "builtIn",
                "id": "shelves",
                "width": 4,
                "height": 7,
                "depth": 1,
                "shelfCount": 5
            }
        ]
    })
}

// ---------------------------------------------------------------------------
// Test: import migrates, summarizes and snapshots
// ---------------------------------------------------------------------------

#[tokio::test]
async fn import_returns_snapshots_and_migrated_project() {
    let response = post_json(build_test_app(), "/api/v1/projects/import", document()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["migratedLegacyQuote"], true);
    assert_eq!(data["project"]["activeQuoteId"], "legacy");
    assert!(data["project"].get("quoteBuilder").is_none());

    let entities = data["entities"].as_array().expect("entities should be an array");
    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0]["kind"], "room");
    assert_eq!(entities[0]["id"], "living");

    let grand = data["summary"]["grandTotal"].as_f64().unwrap();
    let cached = data["project"]["quotes"][0]["totals"]["grandTotal"].as_f64().unwrap();
    assert_eq!(grand, cached);
}

// ---------------------------------------------------------------------------
// Test: import and preview agree for identical input
// ---------------------------------------------------------------------------

#[tokio::test]
async fn import_snapshot_matches_project_estimate() {
    let doc = document();
    let imported = body_json(post_json(build_test_app(), "/api/v1/projects/import", doc.clone()).await).await;
    let estimated = body_json(post_json(build_test_app(), "/api/v1/estimates/project", doc).await).await;

    for id in ["living", "shelves"] {
        let from_import = imported["data"]["entities"]
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["id"] == id)
            .map(|e| e["snapshot"].clone())
            .unwrap();
        assert_eq!(from_import, estimated["data"]["snapshot"]["entities"][id]);
    }
}

// ---------------------------------------------------------------------------
// Test: rejection paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_document_is_unprocessable() {
    let response = post_raw(build_test_app(), "/api/v1/projects/import", "{\"project\": [").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "IMPORT_ERROR");
}

#[tokio::test]
async fn duplicate_entity_ids_are_rejected() {
    let doc = json!({
        "project": { "id": "p1" },
        "entities": [
            { "kind": "room", "id": "a" },
            { "kind": "room", "id": "a" }
        ]
    });
    let response = post_json(build_test_app(), "/api/v1/projects/import", doc).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
