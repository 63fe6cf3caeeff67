//! # YAML Scenario Repository
//!
//! Each scenario lives in `scenarios/{id}.yaml`. Writes go to a temporary
//! file that is renamed into place, so readers never see half a document.
//! IDs that are not UUIDs never reach the filesystem.

use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::Scenario;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::connection::YamlConnection;
use crate::storage::traits::ScenarioStorage;

/// YAML-file scenario repository
#[derive(Clone)]
pub struct ScenarioRepository {
    connection: YamlConnection,
}

impl ScenarioRepository {
    pub fn new(connection: YamlConnection) -> Self {
        Self { connection }
    }

    /// Path of a scenario's file, or `None` for IDs that can't name one
    fn scenario_path(&self, scenario_id: &str) -> Option<PathBuf> {
        let id = Uuid::parse_str(scenario_id).ok()?;
        Some(
            self.connection
                .scenarios_directory()
                .join(format!("{}.yaml", id.hyphenated())),
        )
    }

    /// `None` when the file doesn't exist
    async fn read_scenario(path: &Path) -> Result<Option<Scenario>> {
        let yaml = match fs::read_to_string(path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read scenario file {}", path.display()))
            }
        };

        serde_yaml::from_str(&yaml)
            .map(Some)
            .with_context(|| format!("Failed to parse scenario file {}", path.display()))
    }
}

#[async_trait]
impl ScenarioStorage for ScenarioRepository {
    async fn store_scenario(&self, scenario: &Scenario) -> Result<()> {
        let path = self
            .scenario_path(&scenario.id)
            .ok_or_else(|| anyhow::anyhow!("Invalid scenario ID: {}", scenario.id))?;

        let yaml = serde_yaml::to_string(scenario)?;
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, yaml)
            .await
            .with_context(|| format!("Failed to write scenario file {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .await
            .with_context(|| format!("Failed to move scenario file into place {}", path.display()))?;

        info!("Stored scenario '{}' at {}", scenario.name, path.display());
        Ok(())
    }

    async fn get_scenario(&self, scenario_id: &str) -> Result<Option<Scenario>> {
        match self.scenario_path(scenario_id) {
            Some(path) => Self::read_scenario(&path).await,
            None => {
                debug!("Rejected malformed scenario ID: {}", scenario_id);
                Ok(None)
            }
        }
    }

    async fn list_scenarios(&self) -> Result<Vec<Scenario>> {
        let directory = self.connection.scenarios_directory();
        let mut entries = match fs::read_dir(&directory).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e).with_context(|| format!("Failed to list {}", directory.display())),
        };

        let mut scenarios = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("yaml") {
                continue;
            }

            match Self::read_scenario(&path).await {
                Ok(Some(scenario)) => scenarios.push(scenario),
                Ok(None) => {}
                Err(e) => warn!("Skipping unreadable scenario file {}: {:#}", path.display(), e),
            }
        }

        scenarios.sort_by(|a, b| a.saved_at.cmp(&b.saved_at).then_with(|| a.name.cmp(&b.name)));
        debug!("Loaded {} scenarios from {}", scenarios.len(), directory.display());
        Ok(scenarios)
    }

    async fn delete_scenario(&self, scenario_id: &str) -> Result<bool> {
        let path = match self.scenario_path(scenario_id) {
            Some(path) => path,
            None => return Ok(false),
        };

        match fs::remove_file(&path).await {
            Ok(()) => {
                info!("Deleted scenario {}", scenario_id);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("Failed to delete scenario file {}", path.display())),
        }
    }
}
