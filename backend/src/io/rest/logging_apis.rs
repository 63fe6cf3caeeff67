use axum::{http::StatusCode, response::Json};
use shared::{LogRequest, LogResponse};
use tracing::{debug, error, info, warn, Level};

/// Browser levels map onto ours; anything unrecognised is logged as info
fn client_level(level: &str) -> Level {
    match level.trim().to_ascii_lowercase().as_str() {
        "debug" | "trace" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Re-emit a browser log line through the server log
pub async fn log_message(Json(request): Json<LogRequest>) -> Result<Json<LogResponse>, StatusCode> {
    if request.message.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let component = request.component.as_deref().unwrap_or("frontend");
    match client_level(&request.level) {
        Level::DEBUG => debug!(target: "client", component, "{}", request.message),
        Level::WARN => warn!(target: "client", component, "{}", request.message),
        Level::ERROR => error!(target: "client", component, "{}", request.message),
        _ => info!(target: "client", component, "{}", request.message),
    }

    Ok(Json(LogResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_level_mapping() {
        assert_eq!(client_level("ERROR"), Level::ERROR);
        assert_eq!(client_level("warning"), Level::WARN);
        assert_eq!(client_level("debug"), Level::DEBUG);
        assert_eq!(client_level("verbose"), Level::INFO);
    }

    #[tokio::test]
    async fn test_blank_message_rejected() {
        let request = LogRequest {
            level: "info".to_string(),
            message: "  ".to_string(),
            component: None,
        };
        assert_eq!(log_message(Json(request)).await.unwrap_err(), StatusCode::BAD_REQUEST);
    }
}
