//! Handlers for calculation and pricing settings.
//!
//! Updates are validated by the engine and swap in a whole new snapshot under
//! the write lock; a rejected patch leaves the current settings untouched.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use brushquote_core::settings::{
    CalculationSettings, CalculationSettingsPatch, PricingSettings, PricingSettingsPatch,
};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Calculation settings
// ---------------------------------------------------------------------------

/// GET /settings/calculation
pub async fn get_calculation(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = state.settings.read().await;
    Ok(Json(DataResponse {
        data: settings.calculation.clone(),
    }))
}

/// PUT /settings/calculation
pub async fn update_calculation(
    State(state): State<AppState>,
    payload: Result<Json<CalculationSettingsPatch>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(patch) = payload?;
    let mut settings = state.settings.write().await;
    settings.calculation = settings.calculation.apply_patch(&patch)?;
    tracing::info!("Calculation settings updated");
    Ok(Json(DataResponse {
        data: settings.calculation.clone(),
    }))
}

/// POST /settings/calculation/reset
pub async fn reset_calculation(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut settings = state.settings.write().await;
    settings.calculation = CalculationSettings::default();
    tracing::info!("Calculation settings reset to defaults");
    Ok(Json(DataResponse {
        data: settings.calculation.clone(),
    }))
}

// ---------------------------------------------------------------------------
// Pricing settings
// ---------------------------------------------------------------------------

/// GET /settings/pricing
pub async fn get_pricing(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = state.settings.read().await;
    Ok(Json(DataResponse {
        data: settings.pricing.clone(),
    }))
}

/// PUT /settings/pricing
pub async fn update_pricing(
    State(state): State<AppState>,
    payload: Result<Json<PricingSettingsPatch>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(patch) = payload?;
    let mut settings = state.settings.write().await;
    settings.pricing = settings.pricing.apply_patch(&patch)?;
    tracing::info!("Pricing settings updated");
    Ok(Json(DataResponse {
        data: settings.pricing.clone(),
    }))
}

/// POST /settings/pricing/reset
pub async fn reset_pricing(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut settings = state.settings.write().await;
    settings.pricing = PricingSettings::default();
    tracing::info!("Pricing settings reset to defaults");
    Ok(Json(DataResponse {
        data: settings.pricing.clone(),
    }))
}
