//! # Server Configuration
//!
//! Settings are read from the environment with defaults suitable for local
//! development (backend on port 3000, `trunk serve` frontend on port 8080).
//!
//! | variable                | default              |
//! |-------------------------|----------------------|
//! | `BUDGET_BIND_ADDR`      | `127.0.0.1:3000`     |
//! | `BUDGET_DATA_DIR`       | `data`               |
//! | `BUDGET_STATIC_DIR`     | `../frontend/dist`   |
//! | `BUDGET_ALLOWED_ORIGIN` | `http://localhost:8080` |

use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "BUDGET_BIND_ADDR";
pub const DATA_DIR_VAR: &str = "BUDGET_DATA_DIR";
pub const STATIC_DIR_VAR: &str = "BUDGET_STATIC_DIR";
pub const ALLOWED_ORIGIN_VAR: &str = "BUDGET_ALLOWED_ORIGIN";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },
    #[error("{var} is not a valid origin header value: {value}")]
    InvalidOrigin { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Root of the scenario store
    pub data_dir: PathBuf,
    /// Built frontend served for every non-API path
    pub static_dir: PathBuf,
    /// Origin allowed by CORS when the frontend is served separately
    pub allowed_origin: HeaderValue,
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_of = |var: &str, default: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr = value_of(BIND_ADDR_VAR, DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr { var: BIND_ADDR_VAR, value: bind_addr.clone() })?;

        let allowed_origin = value_of(ALLOWED_ORIGIN_VAR, DEFAULT_ALLOWED_ORIGIN);
        let allowed_origin = allowed_origin
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::InvalidOrigin { var: ALLOWED_ORIGIN_VAR, value: allowed_origin.clone() })?;

        Ok(Self {
            bind_addr,
            data_dir: PathBuf::from(value_of(DATA_DIR_VAR, DEFAULT_DATA_DIR)),
            static_dir: PathBuf::from(value_of(STATIC_DIR_VAR, DEFAULT_STATIC_DIR)),
            allowed_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.static_dir, PathBuf::from("../frontend/dist"));
        assert_eq!(config.allowed_origin, "http://localhost:8080");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "0.0.0.0:5000"),
            (DATA_DIR_VAR, "/var/lib/budget"),
            (STATIC_DIR_VAR, "dist"),
            (ALLOWED_ORIGIN_VAR, "https://budget.example.com"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/budget"));
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.allowed_origin, "https://budget.example.com");
    }

    #[test]
    fn test_blank_value_falls_back_to_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[(DATA_DIR_VAR, "  ")])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = ServerConfig::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "not an address")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }
}
