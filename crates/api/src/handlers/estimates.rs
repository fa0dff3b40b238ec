//! Handlers for estimate endpoints: live preview, project summary with save
//! snapshots, and paint-tier projections.
//!
//! Every handler clones one settings snapshot, migrates a legacy quote
//! builder if present, then calls the same engine entry points.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use brushquote_core::aggregate::{self, ProjectSnapshot, ProjectSummary};
use brushquote_core::options;
use brushquote_core::{PaintableEntity, Project};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    #[serde(default)]
    pub project: Project,
    pub entity: PaintableEntity,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    #[serde(default)]
    pub project: Project,
    #[serde(default)]
    pub entities: Vec<PaintableEntity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsRequest {
    #[serde(flatten)]
    pub estimate: ProjectRequest,
    /// Only return tiers when the quote shows them on the proposal.
    #[serde(default)]
    pub proposal: bool,
}

/// Summary plus the snapshot the store persists on save.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEstimate {
    pub summary: ProjectSummary,
    pub snapshot: ProjectSnapshot,
}

fn migrated(mut project: Project) -> Project {
    project.migrate_legacy_quote_builder();
    project
}

// ---------------------------------------------------------------------------
// POST /estimates/entity
// ---------------------------------------------------------------------------

/// Price one entity under its project's authoritative quote.
pub async fn preview_entity(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload?;
    let settings = state.settings_snapshot().await;
    let project = migrated(body.project);

    let preview = aggregate::preview_entity(
        &project,
        &body.entity,
        &settings.calculation,
        &settings.pricing,
    );
    Ok(Json(DataResponse { data: preview }))
}

// ---------------------------------------------------------------------------
// POST /estimates/project
// ---------------------------------------------------------------------------

/// Summarize a whole project and return the values a save would persist.
pub async fn estimate_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload?;
    // CoreError converts to AppError via #[from].
    aggregate::validate_entity_count(body.entities.len())?;
    let settings = state.settings_snapshot().await;
    let project = migrated(body.project);

    let summary = aggregate::summarize_project(
        &project,
        &body.entities,
        &settings.calculation,
        &settings.pricing,
    );
    let snapshot = aggregate::project_snapshot(&body.entities, &summary);

    Ok(Json(DataResponse {
        data: ProjectEstimate { summary, snapshot },
    }))
}

// ---------------------------------------------------------------------------
// POST /estimates/options
// ---------------------------------------------------------------------------

/// Project the quote's paint tiers over the project summary.
pub async fn paint_options(
    State(state): State<AppState>,
    payload: Result<Json<OptionsRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload?;
    aggregate::validate_entity_count(body.estimate.entities.len())?;
    let settings = state.settings_snapshot().await;
    let project = migrated(body.estimate.project);

    let summary = aggregate::summarize_project(
        &project,
        &body.estimate.entities,
        &settings.calculation,
        &settings.pricing,
    );
    let resolved = project.resolve_quote_builder();
    let tiers = if body.proposal {
        options::proposal_options(&summary, &resolved.builder, &settings.pricing)
    } else {
        options::paint_tier_options(&summary, &resolved.builder.paint_options, &settings.pricing)
    };

    Ok(Json(DataResponse { data: tiers }))
}
