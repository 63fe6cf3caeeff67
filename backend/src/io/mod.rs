//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services.
//!
//! - **rest**: axum handlers for calculation, scenarios and client logs
//!
//! Handlers translate domain results into status codes and JSON bodies and
//! log every request; they hold no business rules.

pub mod rest;

pub use rest::*;
