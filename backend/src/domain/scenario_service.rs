use chrono::Utc;
use shared::{SaveScenarioRequest, Scenario, ScenarioAck, ScenarioMap};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::storage::ScenarioStorage;

const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Scenario not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidName(String),
    #[error("Storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

/// Service for saving, listing and removing named scenarios
#[derive(Clone)]
pub struct ScenarioService {
    storage: Arc<dyn ScenarioStorage>,
}

impl ScenarioService {
    pub fn new(storage: Arc<dyn ScenarioStorage>) -> Self {
        Self { storage }
    }

    /// Save a calculation result under a user-chosen name
    pub async fn save_scenario(&self, request: SaveScenarioRequest) -> Result<ScenarioAck, ScenarioError> {
        let name = Self::validate_name(&request.name)?;
        info!("Saving scenario: name={}", name);

        let scenario = Scenario {
            id: Uuid::new_v4().to_string(),
            name,
            saved_at: Utc::now().to_rfc3339(),
            input: request.input,
            result: request.result,
        };

        self.storage.store_scenario(&scenario).await?;

        info!("Saved scenario '{}' with ID: {}", scenario.name, scenario.id);
        Ok(ScenarioAck {
            id: Some(scenario.id),
            message: "Scenario saved".to_string(),
        })
    }

    /// All scenarios keyed by ID
    pub async fn list_scenarios(&self) -> Result<ScenarioMap, ScenarioError> {
        let scenarios = self.storage.list_scenarios().await?;
        info!("Found {} scenarios", scenarios.len());

        Ok(scenarios
            .into_iter()
            .map(|scenario| (scenario.id.clone(), scenario))
            .collect())
    }

    pub async fn get_scenario(&self, scenario_id: &str) -> Result<Scenario, ScenarioError> {
        match self.storage.get_scenario(scenario_id).await? {
            Some(scenario) => Ok(scenario),
            None => {
                warn!("Scenario not found: {}", scenario_id);
                Err(ScenarioError::NotFound(scenario_id.to_string()))
            }
        }
    }

    pub async fn delete_scenario(&self, scenario_id: &str) -> Result<ScenarioAck, ScenarioError> {
        info!("Deleting scenario: {}", scenario_id);

        if !self.storage.delete_scenario(scenario_id).await? {
            warn!("Scenario not found for deletion: {}", scenario_id);
            return Err(ScenarioError::NotFound(scenario_id.to_string()));
        }

        Ok(ScenarioAck {
            id: Some(scenario_id.to_string()),
            message: "Scenario deleted".to_string(),
        })
    }

    fn validate_name(name: &str) -> Result<String, ScenarioError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScenarioError::InvalidName("Scenario name cannot be empty".to_string()));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ScenarioError::InvalidName(format!(
                "Scenario name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(name.to_string())
    }
}
