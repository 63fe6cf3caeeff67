pub mod budget_form;
pub mod chart_slot;
pub mod cost_chart;
pub mod result_panel;
pub mod scenario_list;

pub use budget_form::BudgetForm;
pub use cost_chart::CostChart;
pub use result_panel::ResultPanel;
pub use scenario_list::ScenarioList;
