//! # YAML File Storage
//!
//! ```text
//! data/
//! └── scenarios/
//!     ├── 0b6f6e2e-2f55-4d8c-9a36-3f3f2b0c8d11.yaml
//!     └── 7d1c9a52-5b0e-4d61-a0f4-3e2b9c1d5a77.yaml
//! ```

pub mod connection;
pub mod scenario_repository;

pub use connection::YamlConnection;
pub use scenario_repository::ScenarioRepository;
