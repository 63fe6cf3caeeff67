//! # REST API for Scenario Management
//!
//! Endpoints for saving, listing, fetching and deleting named scenarios.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::{SaveScenarioRequest, ScenarioAck};
use tracing::{error, info};

use crate::domain::ScenarioError;
use crate::AppState;

/// Save a calculation result under a name
pub async fn save_scenario(
    State(state): State<AppState>,
    Json(request): Json<SaveScenarioRequest>,
) -> impl IntoResponse {
    info!("POST /scenarios - name: {}", request.name);

    match state.scenario_service.save_scenario(request).await {
        Ok(ack) => (StatusCode::CREATED, Json(ack)).into_response(),
        Err(e) => scenario_error_response("save scenario", e),
    }
}

/// List all scenarios keyed by ID
pub async fn list_scenarios(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /scenarios");

    match state.scenario_service.list_scenarios().await {
        Ok(scenarios) => (StatusCode::OK, Json(scenarios)).into_response(),
        Err(e) => scenario_error_response("list scenarios", e),
    }
}

/// Get a scenario by ID
pub async fn get_scenario(
    State(state): State<AppState>,
    Path(scenario_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /scenario/{}", scenario_id);

    match state.scenario_service.get_scenario(&scenario_id).await {
        Ok(scenario) => (StatusCode::OK, Json(scenario)).into_response(),
        Err(e) => scenario_error_response("get scenario", e),
    }
}

/// Delete a scenario
pub async fn delete_scenario(
    State(state): State<AppState>,
    Path(scenario_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /scenario/{}", scenario_id);

    match state.scenario_service.delete_scenario(&scenario_id).await {
        Ok(ack) => (StatusCode::OK, Json(ack)).into_response(),
        Err(e) => scenario_error_response("delete scenario", e),
    }
}

fn scenario_error_response(action: &str, e: ScenarioError) -> Response {
    let status = match &e {
        ScenarioError::NotFound(_) => StatusCode::NOT_FOUND,
        ScenarioError::InvalidName(_) => StatusCode::BAD_REQUEST,
        ScenarioError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Failed to {}: {}", action, e);
    } else {
        info!("Could not {}: {}", action, e);
    }

    let message = match e {
        ScenarioError::Storage(_) => format!("Failed to {}", action),
        other => other.to_string(),
    };
    (status, Json(ScenarioAck { id: None, message })).into_response()
}
