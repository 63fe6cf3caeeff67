mod components;
mod hooks;
mod services;

use yew::prelude::*;

use components::{BudgetForm, ResultPanel, ScenarioList};
use hooks::{use_budget_form, use_scenarios};
use services::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let form = use_budget_form(&api_client);
    let scenarios = use_scenarios(&api_client, form.actions.show_result.clone());

    html! {
        <div class="container">
            <h1>{"Home Buying Budget Estimator"}</h1>

            <BudgetForm
                input={form.state.input.clone()}
                errors={form.state.errors.clone()}
                submitting={form.state.submitting}
                general_error={form.state.general_error.clone()}
                on_field_change={form.actions.on_field_change.clone()}
                on_submit={form.actions.submit.clone()}
            />

            {if let Some(displayed) = form.state.displayed.clone() {
                html! {
                    <ResultPanel displayed={displayed} on_save={scenarios.actions.save.clone()} />
                }
            } else { html! {} }}

            <ScenarioList
                scenarios={scenarios.state.scenarios.clone()}
                loading={scenarios.state.loading}
                error={scenarios.state.error.clone()}
                on_action={scenarios.actions.dispatch.clone()}
                on_refresh={scenarios.actions.load.clone()}
            />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
