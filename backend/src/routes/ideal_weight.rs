//! Ideal weight calculator API routes

use crate::error::ApiError;
use crate::services::EstimateService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use ideal_weight_shared::{IdealWeightReport, IdealWeightRequest};

/// Create ideal weight routes
pub fn ideal_weight_routes() -> Router<AppState> {
    Router::new().route("/", post(calculate))
}

/// POST /api/v1/ideal-weight - Calculate an ideal weight range
///
/// One call per "Calculate" action. Nothing is stored.
async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<IdealWeightRequest>, JsonRejection>,
) -> Result<Json<IdealWeightReport>, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let report = EstimateService::estimate(req, &state.config().estimator)?;
    Ok(Json(report))
}
