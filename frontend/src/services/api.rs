use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{BudgetInput, CalculateResponse, SaveScenarioRequest, Scenario, ScenarioAck, ScenarioMap};

/// Where the API lives; empty means the page's own origin
const DEFAULT_BASE_URL: &str = match option_env!("BUDGET_API_URL") {
    Some(url) => url,
    None => "",
};

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the compile-time base URL
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Run the estimate. Validation failures come back as
    /// `CalculateResponse::Invalid`, not as an error.
    pub async fn calculate(&self, input: &BudgetInput) -> Result<CalculateResponse, String> {
        let response = Request::post(&self.endpoint("/calculate"))
            .json(input)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.ok() || response.status() == 400 {
            parse_json(response).await
        } else {
            Err(error_text(response).await)
        }
    }

    pub async fn save_scenario(&self, request: &SaveScenarioRequest) -> Result<ScenarioAck, String> {
        let response = Request::post(&self.endpoint("/scenarios"))
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        expect_ok(response).await
    }

    /// All saved scenarios keyed by ID
    pub async fn list_scenarios(&self) -> Result<ScenarioMap, String> {
        let response = Request::get(&self.endpoint("/scenarios"))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        expect_ok(response).await
    }

    pub async fn get_scenario(&self, scenario_id: &str) -> Result<Scenario, String> {
        let response = Request::get(&self.endpoint(&format!("/scenario/{}", scenario_id)))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        expect_ok(response).await
    }

    pub async fn delete_scenario(&self, scenario_id: &str) -> Result<ScenarioAck, String> {
        let response = Request::delete(&self.endpoint(&format!("/scenario/{}", scenario_id)))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        expect_ok(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn expect_ok<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.ok() {
        parse_json(response).await
    } else {
        Err(error_text(response).await)
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn error_text(response: Response) -> String {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    format!("Server returned {}: {}", status, body)
}
