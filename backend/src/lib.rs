//! # Budget Estimator Backend
//!
//! HTTP service behind the home budget estimator page.
//!
//! ## Architecture
//!
//! ```text
//! Yew frontend
//!     ↓
//! IO Layer (REST handlers)
//!     ↓
//! Domain Layer (budget calculator, scenario service)
//!     ↓
//! Storage Layer (YAML scenario files)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::ServerConfig;
use crate::domain::{BudgetCalculator, ScenarioService};
use crate::storage::{ScenarioRepository, YamlConnection};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub budget_calculator: BudgetCalculator,
    pub scenario_service: ScenarioService,
}

/// Initialize all services from the configuration
pub fn initialize_backend(config: &ServerConfig) -> Result<AppState> {
    let connection = YamlConnection::new(&config.data_dir)?;
    info!("Scenario storage ready in {}", connection.base_directory().display());
    let scenario_repository = Arc::new(ScenarioRepository::new(connection));

    info!("Setting up domain services");
    Ok(AppState {
        budget_calculator: BudgetCalculator::new(),
        scenario_service: ScenarioService::new(scenario_repository),
    })
}

/// Router with the API routes only
pub fn api_router(app_state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(io::calculate))
        .route("/scenarios", get(io::list_scenarios).post(io::save_scenario))
        .route("/scenario/:id", get(io::get_scenario).delete(io::delete_scenario))
        .route("/logs", post(io::log_message))
        .with_state(app_state)
}

/// Full application: API routes, static frontend and CORS
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router {
    // CORS setup to allow a separately served frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    api_router(app_state)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_backend_prepares_data_directory() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("budget-data");
        let data_dir_value = data_dir.to_string_lossy().to_string();
        let config = ServerConfig::from_lookup(|var| (var == "BUDGET_DATA_DIR").then(|| data_dir_value.clone())).unwrap();

        initialize_backend(&config).unwrap();

        assert!(data_dir.join("scenarios").is_dir());
    }
}
