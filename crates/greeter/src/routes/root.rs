//! Root endpoint.

use axum::Json;
use serde::Serialize;

/// Body returned by `GET /`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GreetingPayload {
    pub message: &'static str,
    pub version: &'static str,
}

pub const GREETING: GreetingPayload = GreetingPayload {
    message: "Hello, Candidate",
    version: "1.0.0",
};

/// GET / — returns the fixed greeting.
pub async fn greet() -> Json<GreetingPayload> {
    Json(GREETING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serialization() {
        let json = serde_json::to_string(&GREETING).unwrap();
        assert_eq!(json, r#"{"message":"Hello, Candidate","version":"1.0.0"}"#);
    }

    #[tokio::test]
    async fn test_handler_returns_greeting() {
        let Json(payload) = greet().await;
        assert_eq!(payload, GREETING);
    }
}
