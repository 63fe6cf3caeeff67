//! # Domain Module
//!
//! Business logic of the budget estimator, independent of HTTP and of the
//! storage backend.
//!
//! - **budget_calculator**: input validation and the price, down payment and
//!   monthly cost computation
//! - **scenario_service**: naming, saving, listing and removing scenarios

pub mod budget_calculator;
pub mod scenario_service;

pub use budget_calculator::{BudgetCalculator, CityMarket, ValidatedBudget};
pub use scenario_service::{ScenarioError, ScenarioService};
