use axum::routing::post;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// POST   /import                                   -> import_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/import", post(projects::import_project))
}
