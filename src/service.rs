//! Request handling for the feedback service.
//!
//! Routes are `POST /feedback` and `GET /health`. The handler is a pure
//! function so it can sit behind any transport; [`run_stdio_server`] drives
//! it with one JSON request per line on stdin.

use crate::analyzer::TajweedEngine;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use thiserror::Error;
use tracing::{info, warn};

/// Health check payload
pub const HEALTH_STATUS: &str = "✅ Tajweed engine is running";

/// Incoming request envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceRequest {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub body: Option<Value>,
}

/// Outgoing response: HTTP-style status code and JSON body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: Value,
}

impl ServiceResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }
}

/// Validation failures for a feedback request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("No JSON data provided")]
    NoData,
    #[error("Both 'user_text' and 'correct_text' are required")]
    MissingText,
}

/// A validated feedback request with both texts trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRequest {
    pub user_text: String,
    pub correct_text: String,
}

impl FeedbackRequest {
    /// Validate a request body. The body must be a non-empty JSON object
    /// whose two text fields are non-empty strings after trimming.
    pub fn from_body(body: Option<&Value>) -> Result<Self, RequestError> {
        let fields = match body {
            Some(Value::Object(map)) if !map.is_empty() => map,
            _ => return Err(RequestError::NoData),
        };
        let text = |key: &str| {
            fields
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .unwrap_or("")
                .to_string()
        };
        let user_text = text("user_text");
        let correct_text = text("correct_text");
        if user_text.is_empty() || correct_text.is_empty() {
            return Err(RequestError::MissingText);
        }
        Ok(Self {
            user_text,
            correct_text,
        })
    }
}

/// Handle a single request and return a response.
pub fn handle_request(engine: &TajweedEngine, req: &ServiceRequest) -> ServiceResponse {
    let response = match (req.method.to_ascii_uppercase().as_str(), req.path.as_str()) {
        ("POST", "/feedback") => handle_feedback(engine, req.body.as_ref()),
        ("GET", "/health") => ServiceResponse::ok(json!({ "status": HEALTH_STATUS })),
        _ => ServiceResponse::error(404, "Not found"),
    };
    info!(
        method = %req.method,
        path = %req.path,
        status = response.status,
        "handled request"
    );
    response
}

fn handle_feedback(engine: &TajweedEngine, body: Option<&Value>) -> ServiceResponse {
    let request = match FeedbackRequest::from_body(body) {
        Ok(r) => r,
        Err(e) => return ServiceResponse::error(400, e.to_string()),
    };

    match engine.get_feedback(&request.user_text, &request.correct_text) {
        Ok(feedback) => match serde_json::to_value(&feedback) {
            Ok(body) => ServiceResponse::ok(body),
            Err(e) => internal_error(e),
        },
        Err(e) => internal_error(e),
    }
}

fn internal_error(e: impl std::fmt::Display) -> ServiceResponse {
    warn!(error = %e, "feedback failed");
    ServiceResponse::error(500, format!("Internal error: {}", e))
}

/// Run the service loop (stdin / stdout). Malformed lines get a 400 and
/// the loop carries on.
pub fn run_stdio_server(engine: &TajweedEngine) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let reader = BufReader::new(stdin.lock());

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<ServiceRequest>(&line) {
            Ok(req) => handle_request(engine, &req),
            Err(e) => {
                warn!(error = %e, "malformed request line");
                ServiceResponse::error(400, RequestError::NoData.to_string())
            }
        };
        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(body: Option<Value>) -> ServiceRequest {
        ServiceRequest {
            method: "POST".to_string(),
            path: "/feedback".to_string(),
            body,
        }
    }

    #[test]
    fn test_health() {
        let req = ServiceRequest {
            method: "GET".to_string(),
            path: "/health".to_string(),
            body: None,
        };
        let resp = handle_request(&TajweedEngine::new(), &req);
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body["status"], HEALTH_STATUS);
    }

    #[test]
    fn test_feedback_success() {
        let resp = handle_request(
            &TajweedEngine::new(),
            &post(Some(json!({
                "user_text": "  بسم الله  ",
                "correct_text": "بسم الله"
            }))),
        );
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body["accuracy"], 100);
        // texts are trimmed before reaching the engine
        assert_eq!(resp.body["user_text"], "بسم الله");
    }

    #[test]
    fn test_missing_body() {
        let resp = handle_request(&TajweedEngine::new(), &post(None));
        assert_eq!(resp.status, 400);
        assert_eq!(resp.body["error"], "No JSON data provided");
    }

    #[test]
    fn test_empty_object_and_non_object() {
        for body in [json!({}), json!([1, 2]), json!("text"), Value::Null] {
            let resp = handle_request(&TajweedEngine::new(), &post(Some(body)));
            assert_eq!(resp.status, 400);
            assert_eq!(resp.body["error"], "No JSON data provided");
        }
    }

    #[test]
    fn test_blank_or_missing_text() {
        for body in [
            json!({ "user_text": "بسم" }),
            json!({ "user_text": "   ", "correct_text": "بسم" }),
            json!({ "user_text": 5, "correct_text": "بسم" }),
        ] {
            let resp = handle_request(&TajweedEngine::new(), &post(Some(body)));
            assert_eq!(resp.status, 400);
            assert_eq!(
                resp.body["error"],
                "Both 'user_text' and 'correct_text' are required"
            );
        }
    }

    #[test]
    fn test_unknown_route() {
        let req = ServiceRequest {
            method: "GET".to_string(),
            path: "/feedback".to_string(),
            body: None,
        };
        let resp = handle_request(&TajweedEngine::new(), &req);
        assert_eq!(resp.status, 404);
    }

    #[test]
    fn test_method_is_case_insensitive() {
        let mut req = post(Some(json!({ "user_text": "a", "correct_text": "a" })));
        req.method = "post".to_string();
        assert_eq!(handle_request(&TajweedEngine::new(), &req).status, 200);
    }

    #[test]
    fn test_request_envelope_parsing() {
        let req: ServiceRequest =
            serde_json::from_str(r#"{"method":"GET","path":"/health"}"#).unwrap();
        assert!(req.body.is_none());
    }
}
