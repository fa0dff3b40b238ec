use axum::routing::{get, post};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET    /calculation                              -> get_calculation
/// PUT    /calculation                              -> update_calculation
/// POST   /calculation/reset                        -> reset_calculation
/// GET    /pricing                                  -> get_pricing
/// PUT    /pricing                                  -> update_pricing
/// POST   /pricing/reset                            -> reset_pricing
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/calculation",
            get(settings::get_calculation).put(settings::update_calculation),
        )
        .route("/calculation/reset", post(settings::reset_calculation))
        .route(
            "/pricing",
            get(settings::get_pricing).put(settings::update_pricing),
        )
        .route("/pricing/reset", post(settings::reset_pricing))
}
