use axum::routing::post;
use axum::Router;

use crate::handlers::estimates;
use crate::state::AppState;

/// Routes mounted at `/estimates`.
///
/// ```text
/// POST   /entity                                   -> preview_entity
/// POST   /project                                  -> estimate_project
/// POST   /options                                  -> paint_options
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/entity", post(estimates::preview_entity))
        .route("/project", post(estimates::estimate_project))
        .route("/options", post(estimates::paint_options))
}
