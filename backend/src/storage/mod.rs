//! # Storage Module
//!
//! Persistence for saved scenarios.
//!
//! - **traits**: the [`ScenarioStorage`] interface the domain layer depends on
//! - **yaml**: one YAML document per scenario under the data directory

pub mod traits;
pub mod yaml;

pub use traits::ScenarioStorage;
pub use yaml::{ScenarioRepository, YamlConnection};
