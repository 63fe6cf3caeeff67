use gloo::net::http::Request;
use shared::LogRequest;
use wasm_bindgen_futures::spawn_local;

use super::api::ApiClient;

/// Per-component logger: writes to the browser console and forwards the
/// line to the server's `/logs` endpoint
#[derive(Clone, Copy)]
pub struct Logger {
    component: &'static str,
}

impl Logger {
    pub const fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn info(&self, message: &str) {
        gloo::console::info!(self.prefixed(message));
        self.forward("info", message);
    }

    pub fn warn(&self, message: &str) {
        gloo::console::warn!(self.prefixed(message));
        self.forward("warn", message);
    }

    pub fn error(&self, message: &str) {
        gloo::console::error!(self.prefixed(message));
        self.forward("error", message);
    }

    fn prefixed(&self, message: &str) -> String {
        format!("[{}] {}", self.component, message)
    }

    fn forward(&self, level: &str, message: &str) {
        let request = LogRequest {
            level: level.to_string(),
            message: message.to_string(),
            component: Some(self.component.to_string()),
        };
        let url = ApiClient::new().endpoint("/logs");

        // Fire and forget
        spawn_local(async move {
            if let Ok(request) = Request::post(&url).json(&request) {
                let _ = request.send().await;
            }
        });
    }
}
