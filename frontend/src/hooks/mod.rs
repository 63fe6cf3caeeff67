pub mod use_budget_form;
pub mod use_scenarios;

pub use use_budget_form::{use_budget_form, DisplayedResult};
pub use use_scenarios::{use_scenarios, ScenarioAction};
