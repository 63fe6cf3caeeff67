use shared::format::format_dollars;
use shared::ScenarioMap;
use web_sys::Element;
use yew::prelude::*;

use crate::hooks::use_scenarios::saved_order;
use crate::hooks::ScenarioAction;

#[derive(Properties, PartialEq)]
pub struct ScenarioListProps {
    pub scenarios: ScenarioMap,
    pub loading: bool,
    pub error: Option<String>,
    pub on_action: Callback<ScenarioAction>,
    pub on_refresh: Callback<()>,
}

/// Saved scenarios. One click handler on the list reads `data-action` and
/// `data-id` off whichever button was hit.
#[function_component(ScenarioList)]
pub fn scenario_list(props: &ScenarioListProps) -> Html {
    let onclick = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            let button = e
                .target_dyn_into::<Element>()
                .and_then(|target| target.closest("[data-action]").ok().flatten());

            if let Some(button) = button {
                let action = button.get_attribute("data-action").unwrap_or_default();
                let id = button.get_attribute("data-id").unwrap_or_default();
                if let Some(action) = ScenarioAction::parse(&action, &id) {
                    on_action.emit(action);
                }
            }
        })
    };

    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    html! {
        <section class="scenarios-section">
            <h2>{"Saved Scenarios"}</h2>
            <button type="button" class="btn btn-small" onclick={on_refresh} disabled={props.loading}>
                {"Refresh"}
            </button>

            {if let Some(error) = props.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            {if props.scenarios.is_empty() && !props.loading {
                html! { <p class="scenarios-empty">{"No saved scenarios yet."}</p> }
            } else { html! {} }}

            <ul id="scenarioList" class="scenario-list" {onclick}>
                {for saved_order(&props.scenarios).into_iter().map(|scenario| html! {
                    <li class="scenario-item" key={scenario.id.clone()}>
                        <span class="scenario-name">{scenario.name.clone()}</span>
                        <span class="scenario-price">{format_dollars(scenario.result.home_price)}</span>
                        <button type="button" class="btn btn-small" data-action="compare" data-id={scenario.id.clone()}>
                            {"Compare"}
                        </button>
                        <button type="button" class="btn btn-small btn-danger" data-action="delete" data-id={scenario.id.clone()}>
                            {"Delete"}
                        </button>
                    </li>
                })}
            </ul>
        </section>
    }
}
