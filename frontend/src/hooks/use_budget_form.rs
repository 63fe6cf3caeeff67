use shared::{BudgetField, BudgetInput, CalculateResponse, CalculationResult, FieldErrors};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{ApiClient, Logger};

const LOG: Logger = Logger::new("budget-form");

/// Shown for anything that isn't a field validation failure
pub const GENERIC_ERROR: &str = "An error occurred. Please try again later.";

/// A result on screen, with the form values behind it when known
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedResult {
    pub result: CalculationResult,
    pub input: Option<BudgetInput>,
}

#[derive(Clone, PartialEq)]
pub struct BudgetFormState {
    pub input: BudgetInput,
    pub errors: FieldErrors,
    pub displayed: Option<DisplayedResult>,
    pub submitting: bool,
    pub general_error: Option<String>,
}

pub struct UseBudgetFormResult {
    pub state: BudgetFormState,
    pub actions: UseBudgetFormActions,
}

#[derive(Clone)]
pub struct UseBudgetFormActions {
    pub on_field_change: Callback<(BudgetField, String)>,
    pub submit: Callback<()>,
    /// Put an already computed result on screen (scenario compare)
    pub show_result: Callback<DisplayedResult>,
}

/// What a calculate call does to the page
#[derive(Debug, PartialEq)]
pub struct FormOutcome {
    pub errors: FieldErrors,
    pub displayed: Option<DisplayedResult>,
    pub general_error: Option<String>,
}

/// Only a computed result stays on screen. Field errors and failed calls
/// both remove the previous one.
pub fn apply_response(response: Result<CalculateResponse, String>, input: BudgetInput) -> FormOutcome {
    match response {
        Ok(CalculateResponse::Invalid { errors }) => FormOutcome {
            errors,
            displayed: None,
            general_error: None,
        },
        Ok(CalculateResponse::Computed(result)) => FormOutcome {
            errors: FieldErrors::new(),
            displayed: Some(DisplayedResult { result, input: Some(input) }),
            general_error: None,
        },
        Err(_) => FormOutcome {
            errors: FieldErrors::new(),
            displayed: None,
            general_error: Some(GENERIC_ERROR.to_string()),
        },
    }
}

#[hook]
pub fn use_budget_form(api_client: &ApiClient) -> UseBudgetFormResult {
    let input = use_state(BudgetInput::default);
    let errors = use_state(FieldErrors::new);
    let displayed = use_state(|| None::<DisplayedResult>);
    let submitting = use_state(|| false);
    let general_error = use_state(|| None::<String>);

    let on_field_change = {
        let input = input.clone();
        Callback::from(move |(field, value): (BudgetField, String)| {
            input.set((*input).clone().with_value(field, value));
        })
    };

    let submit = {
        let api_client = api_client.clone();
        let input = input.clone();
        let errors = errors.clone();
        let displayed = displayed.clone();
        let submitting = submitting.clone();
        let general_error = general_error.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let request = (*input).clone();
            let errors = errors.clone();
            let displayed = displayed.clone();
            let submitting = submitting.clone();
            let general_error = general_error.clone();

            errors.set(FieldErrors::new());
            general_error.set(None);
            submitting.set(true);

            spawn_local(async move {
                let response = api_client.calculate(&request).await;
                match &response {
                    Ok(CalculateResponse::Invalid { errors }) => {
                        LOG.info(&format!("Server rejected {} field(s)", errors.len()));
                    }
                    Err(e) => LOG.error(&format!("Calculation failed: {}", e)),
                    Ok(CalculateResponse::Computed(_)) => {}
                }

                let outcome = apply_response(response, request);
                errors.set(outcome.errors);
                displayed.set(outcome.displayed);
                general_error.set(outcome.general_error);
                submitting.set(false);
            });
        })
    };

    let show_result = {
        let errors = errors.clone();
        let displayed = displayed.clone();
        let general_error = general_error.clone();
        Callback::from(move |result: DisplayedResult| {
            errors.set(FieldErrors::new());
            general_error.set(None);
            displayed.set(Some(result));
        })
    };

    UseBudgetFormResult {
        state: BudgetFormState {
            input: (*input).clone(),
            errors: (*errors).clone(),
            displayed: (*displayed).clone(),
            submitting: *submitting,
            general_error: (*general_error).clone(),
        },
        actions: UseBudgetFormActions {
            on_field_change,
            submit,
            show_result,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_fill_their_slot_and_clear_the_result() {
        let response: CalculateResponse =
            serde_json::from_str(r#"{"errors": {"annualIncome": "required"}}"#).unwrap();

        let outcome = apply_response(Ok(response), BudgetInput::default());

        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[&BudgetField::AnnualIncome], "required");
        assert_eq!(outcome.displayed, None);
    }

    #[test]
    fn test_computed_result_keeps_its_input() {
        let input = BudgetInput::default().with_value(BudgetField::AnnualIncome, "90000".to_string());
        let result = CalculationResult { home_price: 500_000.0, ..Default::default() };

        let outcome = apply_response(Ok(CalculateResponse::Computed(result.clone())), input.clone());

        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.general_error, None);
        assert_eq!(outcome.displayed, Some(DisplayedResult { result, input: Some(input) }));
    }

    #[test]
    fn test_failed_call_clears_the_previous_result() {
        let outcome = apply_response(
            Err("Network error: connection refused".to_string()),
            BudgetInput::default(),
        );

        assert_eq!(outcome.displayed, None);
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.general_error.as_deref(), Some(GENERIC_ERROR));
    }
}
