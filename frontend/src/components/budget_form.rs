use shared::{BudgetField, BudgetInput, City, FieldErrors, TrustFundChoice};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BudgetFormProps {
    pub input: BudgetInput,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub general_error: Option<String>,

    pub on_field_change: Callback<(BudgetField, String)>,
    pub on_submit: Callback<()>,
}

/// Text of a field's error slot, empty when the field is fine
pub fn error_text(errors: &FieldErrors, field: BudgetField) -> &str {
    errors.get(&field).map(String::as_str).unwrap_or("")
}

/// Inline style of the trust fund amount group
pub fn trust_fund_group_style(choice: TrustFundChoice) -> &'static str {
    if choice.shows_amount() {
        ""
    } else {
        "display: none;"
    }
}

fn event_value(event: &Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlSelectElement>().map(|select| select.value())
}

fn change_handler(field: BudgetField, on_field_change: &Callback<(BudgetField, String)>) -> Callback<Event> {
    let on_field_change = on_field_change.clone();
    Callback::from(move |e: Event| {
        if let Some(value) = event_value(&e) {
            on_field_change.emit((field, value));
        }
    })
}

fn error_slot(errors: &FieldErrors, field: BudgetField) -> Html {
    html! {
        <div class="error" id={format!("{}Error", field)}>{error_text(errors, field)}</div>
    }
}

fn dollar_input(props: &BudgetFormProps, field: BudgetField, placeholder: &'static str) -> Html {
    html! {
        <div class="form-group">
            <label for={field.as_str()}>{field.label()}</label>
            <input
                type="number"
                id={field.as_str()}
                min="0"
                step="1"
                placeholder={placeholder}
                value={props.input.value_of(field).to_string()}
                onchange={change_handler(field, &props.on_field_change)}
                disabled={props.submitting}
            />
            {error_slot(&props.errors, field)}
        </div>
    }
}

#[function_component(BudgetForm)]
pub fn budget_form(props: &BudgetFormProps) -> Html {
    let trust_fund_choice = props.input.trust_fund_choice();

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    // The slider echoes while dragging, not only on release
    let on_rate_input = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = event_value(&e) {
                on_field_change.emit((BudgetField::InterestRate, value));
            }
        })
    };

    html! {
        <section class="budget-form-section">
            {if let Some(error) = props.general_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <form id="budgetForm" onsubmit={onsubmit}>
                {dollar_input(props, BudgetField::AnnualIncome, "150000")}
                {dollar_input(props, BudgetField::TotalSavings, "100000")}

                <div class="form-group">
                    <label for="hasTrustFund">{BudgetField::HasTrustFund.label()}</label>
                    <select
                        id="hasTrustFund"
                        onchange={change_handler(BudgetField::HasTrustFund, &props.on_field_change)}
                        disabled={props.submitting}
                    >
                        <option value="no" selected={trust_fund_choice == TrustFundChoice::No}>{"No"}</option>
                        <option value="yes" selected={trust_fund_choice == TrustFundChoice::Yes}>{"Yes"}</option>
                    </select>
                    {error_slot(&props.errors, BudgetField::HasTrustFund)}
                </div>

                <div id="trustFundAmountGroup" style={trust_fund_group_style(trust_fund_choice)}>
                    {dollar_input(props, BudgetField::TrustFundAmount, "500000")}
                </div>

                <div class="form-group">
                    <label for="city">{BudgetField::City.label()}</label>
                    <select
                        id="city"
                        onchange={change_handler(BudgetField::City, &props.on_field_change)}
                        disabled={props.submitting}
                    >
                        {for City::ALL.iter().map(|city| html! {
                            <option
                                value={city.display_name()}
                                selected={props.input.city == city.display_name()}
                            >
                                {city.display_name()}
                            </option>
                        })}
                    </select>
                    {error_slot(&props.errors, BudgetField::City)}
                </div>

                <div class="form-group">
                    <label for="interestRate">
                        {BudgetField::InterestRate.label()}{": "}
                        <span id="interestRateValue">{props.input.interest_rate.clone()}</span>
                    </label>
                    <input
                        type="range"
                        id="interestRate"
                        min="5.5"
                        max="15"
                        step="0.1"
                        value={props.input.interest_rate.clone()}
                        oninput={on_rate_input}
                        disabled={props.submitting}
                    />
                    {error_slot(&props.errors, BudgetField::InterestRate)}
                </div>

                <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                    {if props.submitting { "Calculating..." } else { "Calculate Budget" }}
                </button>
            </form>
        </section>
    }
}
