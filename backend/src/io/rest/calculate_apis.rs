//! # REST API for Budget Calculation

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::{BudgetInput, CalculateResponse};
use tracing::info;

use crate::AppState;

/// Validate the form values and compute the breakdown.
///
/// Validation failures are a 400 carrying `{"errors": {field: message}}`.
pub async fn calculate(
    State(state): State<AppState>,
    Json(input): Json<BudgetInput>,
) -> impl IntoResponse {
    info!("POST /calculate - city: {}, trust fund: {}", input.city, input.has_trust_fund);

    let response = state.budget_calculator.calculate(&input);
    let status = match response {
        CalculateResponse::Computed(_) => StatusCode::OK,
        CalculateResponse::Invalid { .. } => StatusCode::BAD_REQUEST,
    };

    (status, Json(response)).into_response()
}
