pub mod estimates;
pub mod health;
pub mod projects;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /estimates/entity                        live preview of one entity (POST)
/// /estimates/project                       project summary + snapshots (POST)
/// /estimates/options                       paint-tier projections (POST)
///
/// /projects/import                         JSON import with snapshots (POST)
///
/// /settings/calculation                    get, patch (PUT)
/// /settings/calculation/reset              reset to defaults (POST)
/// /settings/pricing                        get, patch (PUT)
/// /settings/pricing/reset                  reset to defaults (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/estimates", estimates::router())
        .nest("/projects", projects::router())
        .nest("/settings", settings::router())
}
