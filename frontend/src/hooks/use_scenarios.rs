use shared::{SaveScenarioRequest, Scenario, ScenarioMap};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_budget_form::{DisplayedResult, GENERIC_ERROR};
use crate::services::{ApiClient, Logger};

const LOG: Logger = Logger::new("scenarios");

const NAME_PROMPT: &str = "Enter a name for this scenario:";

/// Button intent read back from a scenario list item
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioAction {
    Compare(String),
    Delete(String),
}

impl ScenarioAction {
    /// Decode the `data-action` / `data-id` pair of a clicked button
    pub fn parse(action: &str, id: &str) -> Option<Self> {
        if id.is_empty() {
            return None;
        }
        match action {
            "compare" => Some(ScenarioAction::Compare(id.to_string())),
            "delete" => Some(ScenarioAction::Delete(id.to_string())),
            _ => None,
        }
    }
}

/// Name typed at the prompt; cancel and blank both mean "don't save"
pub fn scenario_name(raw: Option<String>) -> Option<String> {
    let name = raw?.trim().to_string();
    (!name.is_empty()).then_some(name)
}

/// Scenarios in the order they were saved
pub fn saved_order(scenarios: &ScenarioMap) -> Vec<&Scenario> {
    let mut ordered: Vec<&Scenario> = scenarios.values().collect();
    ordered.sort_by(|a, b| a.saved_at.cmp(&b.saved_at).then_with(|| a.name.cmp(&b.name)));
    ordered
}

#[derive(Clone, PartialEq)]
pub struct ScenarioState {
    pub scenarios: ScenarioMap,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseScenariosResult {
    pub state: ScenarioState,
    pub actions: UseScenariosActions,
}

#[derive(Clone)]
pub struct UseScenariosActions {
    pub load: Callback<()>,
    pub save: Callback<DisplayedResult>,
    pub dispatch: Callback<ScenarioAction>,
}

fn prompt_for_name() -> Option<String> {
    web_sys::window().and_then(|window| window.prompt_with_message(NAME_PROMPT).ok().flatten())
}

#[hook]
pub fn use_scenarios(api_client: &ApiClient, on_compare: Callback<DisplayedResult>) -> UseScenariosResult {
    let scenarios = use_state(ScenarioMap::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let load = {
        let api_client = api_client.clone();
        let scenarios = scenarios.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let scenarios = scenarios.clone();
            let loading = loading.clone();
            let error = error.clone();

            loading.set(true);
            spawn_local(async move {
                match api_client.list_scenarios().await {
                    Ok(map) => {
                        error.set(None);
                        scenarios.set(map);
                    }
                    Err(e) => {
                        LOG.error(&format!("Failed to load scenarios: {}", e));
                        error.set(Some(GENERIC_ERROR.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    // Initial fetch on mount
    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(());
            || ()
        });
    }

    let save = {
        let api_client = api_client.clone();
        let error = error.clone();
        let load = load.clone();

        Callback::from(move |displayed: DisplayedResult| {
            let name = match scenario_name(prompt_for_name()) {
                Some(name) => name,
                None => return,
            };

            let api_client = api_client.clone();
            let error = error.clone();
            let load = load.clone();
            let request = SaveScenarioRequest {
                name,
                input: displayed.input,
                result: displayed.result,
            };

            spawn_local(async move {
                match api_client.save_scenario(&request).await {
                    Ok(ack) => {
                        LOG.info(&format!("{}: {}", ack.message, request.name));
                        load.emit(());
                    }
                    Err(e) => {
                        LOG.error(&format!("Failed to save scenario: {}", e));
                        error.set(Some(GENERIC_ERROR.to_string()));
                    }
                }
            });
        })
    };

    let dispatch = {
        let api_client = api_client.clone();
        let error = error.clone();
        let load = load.clone();

        Callback::from(move |action: ScenarioAction| {
            let api_client = api_client.clone();
            let error = error.clone();
            let load = load.clone();
            let on_compare = on_compare.clone();

            spawn_local(async move {
                match action {
                    ScenarioAction::Compare(id) => match api_client.get_scenario(&id).await {
                        Ok(scenario) => on_compare.emit(DisplayedResult {
                            result: scenario.result,
                            input: scenario.input,
                        }),
                        Err(e) => {
                            LOG.error(&format!("Failed to load scenario {}: {}", id, e));
                            error.set(Some(GENERIC_ERROR.to_string()));
                        }
                    },
                    ScenarioAction::Delete(id) => match api_client.delete_scenario(&id).await {
                        Ok(_) => load.emit(()),
                        Err(e) => {
                            LOG.error(&format!("Failed to delete scenario {}: {}", id, e));
                            error.set(Some(GENERIC_ERROR.to_string()));
                        }
                    },
                }
            });
        })
    };

    UseScenariosResult {
        state: ScenarioState {
            scenarios: (*scenarios).clone(),
            loading: *loading,
            error: (*error).clone(),
        },
        actions: UseScenariosActions { load, save, dispatch },
    }
}
