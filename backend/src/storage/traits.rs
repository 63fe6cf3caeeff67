//! # Storage Traits
//!
//! Storage abstraction for saved scenarios, so the domain layer can work
//! against any backend (YAML files today).

use anyhow::Result;
use async_trait::async_trait;
use shared::Scenario;

/// Trait defining the interface for scenario storage operations
#[async_trait]
pub trait ScenarioStorage: Send + Sync {
    /// Store a scenario, replacing any scenario with the same ID
    async fn store_scenario(&self, scenario: &Scenario) -> Result<()>;

    /// Retrieve a specific scenario by ID
    async fn get_scenario(&self, scenario_id: &str) -> Result<Option<Scenario>>;

    /// List all scenarios, oldest first
    async fn list_scenarios(&self) -> Result<Vec<Scenario>>;

    /// Delete a scenario.
    /// Returns true if the scenario was found and deleted, false otherwise
    async fn delete_scenario(&self, scenario_id: &str) -> Result<bool>;
}
