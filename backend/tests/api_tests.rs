use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use budget_estimator_backend::config::ServerConfig;
use budget_estimator_backend::{api_router, initialize_backend};
use serde_json::{json, Value};
use shared::{BudgetField, CalculateResponse, CalculationResult, ScenarioAck, ScenarioMap};
use tempfile::TempDir;
use tower::ServiceExt;

/// Router over a fresh data directory; keep the TempDir alive for the test
fn test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().to_string_lossy().to_string();
    let config = ServerConfig::from_lookup(move |var| (var == "BUDGET_DATA_DIR").then(|| data_dir.clone())).unwrap();
    let state = initialize_backend(&config).unwrap();
    (api_router(state), temp_dir)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, value)
}

fn valid_input() -> Value {
    json!({
        "annualIncome": "200000",
        "totalSavings": "150000",
        "hasTrustFund": "yes",
        "trustFundAmount": "250000",
        "city": "NYC",
        "interestRate": "7"
    })
}

async fn calculate(app: &Router) -> CalculationResult {
    let (status, body) = send(app, "POST", "/calculate", Some(valid_input())).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(body).unwrap()
}

#[tokio::test]
async fn calculate_returns_breakdown() {
    let (app, _temp_dir) = test_app();

    let (status, body) = send(&app, "POST", "/calculate", Some(valid_input())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["homePrice"], 1_488_000.0);
    assert_eq!(body["downPayment"]["from_trust"], 227_600.0);
    assert_eq!(body["monthlyCosts"]["hoa"], 1_000.0);
    assert!(body["limitingFactor"].as_str().unwrap().starts_with("Income"));
    assert_eq!(body["explanations"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn calculate_reports_field_errors() {
    let (app, _temp_dir) = test_app();
    let mut input = valid_input();
    input["annualIncome"] = json!("");
    input["city"] = json!("Atlantis");

    let (status, body) = send(&app, "POST", "/calculate", Some(input)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["annualIncome"], "Please enter a valid annual income.");
    assert_eq!(body["errors"]["city"], "Please select a valid city.");
    assert!(body.get("homePrice").is_none());

    match serde_json::from_value::<CalculateResponse>(body).unwrap() {
        CalculateResponse::Invalid { errors } => {
            assert!(errors.contains_key(&BudgetField::AnnualIncome));
            assert!(errors.contains_key(&BudgetField::City));
        }
        CalculateResponse::Computed(_) => panic!("expected errors"),
    }
}

#[tokio::test]
async fn scenario_lifecycle() {
    let (app, _temp_dir) = test_app();
    let result = calculate(&app).await;

    let mut save_body = serde_json::to_value(&result).unwrap();
    save_body["name"] = json!("NYC with trust");
    save_body["input"] = valid_input();

    let (status, body) = send(&app, "POST", "/scenarios", Some(save_body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let ack: ScenarioAck = serde_json::from_value(body).unwrap();
    let id = ack.id.unwrap();

    let (status, body) = send(&app, "GET", "/scenarios", None).await;
    assert_eq!(status, StatusCode::OK);
    let scenarios: ScenarioMap = serde_json::from_value(body).unwrap();
    assert_eq!(scenarios[&id].name, "NYC with trust");
    assert_eq!(scenarios[&id].result, result);

    let (status, body) = send(&app, "GET", &format!("/scenario/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["homePrice"], 1_488_000.0);
    assert_eq!(body["input"]["city"], "NYC");

    let (status, body) = send(&app, "DELETE", &format!("/scenario/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Scenario deleted");

    let (_, body) = send(&app, "GET", "/scenarios", None).await;
    let scenarios: ScenarioMap = serde_json::from_value(body).unwrap();
    assert!(!scenarios.contains_key(&id));
}

#[tokio::test]
async fn unknown_scenario_is_not_found() {
    let (app, _temp_dir) = test_app();

    let (status, _) = send(&app, "GET", "/scenario/6a1f1f63-0e7c-4b43-a4a4-3c1c5d7d5e90", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/scenario/not-a-real-id", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_scenario_name_is_rejected() {
    let (app, _temp_dir) = test_app();
    let mut save_body = serde_json::to_value(calculate(&app).await).unwrap();
    save_body["name"] = json!("  ");

    let (status, body) = send(&app, "POST", "/scenarios", Some(save_body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Scenario name cannot be empty");
}

#[tokio::test]
async fn client_logs_are_accepted() {
    let (app, _temp_dir) = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/logs",
        Some(json!({ "level": "error", "message": "fetch failed", "component": "form" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}
