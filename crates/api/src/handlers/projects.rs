//! Handler for project import.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use brushquote_core::import::import_project_json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /projects/import
// ---------------------------------------------------------------------------

/// Import a project document and return it with computed snapshots.
///
/// The raw body is handed to the engine so malformed documents surface as
/// import errors (422) rather than extractor rejections.
pub async fn import_project(
    State(state): State<AppState>,
    body: String,
) -> AppResult<impl IntoResponse> {
    let settings = state.settings_snapshot().await;
    let imported = import_project_json(&body, &settings.calculation, &settings.pricing)?;
    Ok(Json(DataResponse { data: imported }))
}
