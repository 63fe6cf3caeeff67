use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const SCENARIOS_DIRECTORY: &str = "scenarios";

/// YamlConnection owns the data directory and the layout below it
#[derive(Clone, Debug)]
pub struct YamlConnection {
    base_directory: PathBuf,
}

impl YamlConnection {
    /// Create a new connection rooted at `base_directory`, creating the
    /// directory tree if it doesn't exist
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        let connection = Self { base_directory };

        let scenarios = connection.scenarios_directory();
        if !scenarios.exists() {
            fs::create_dir_all(&scenarios)
                .with_context(|| format!("Failed to create data directory {}", scenarios.display()))?;
            info!("Created scenario directory: {}", scenarios.display());
        }

        Ok(connection)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn scenarios_directory(&self) -> PathBuf {
        self.base_directory.join(SCENARIOS_DIRECTORY)
    }
}
