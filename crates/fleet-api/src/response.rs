//! Status classification and payload decoding for backend responses
//!
//! Mutation endpoints wrap the entity as `{"data": <entity>}` and are
//! unwrapped exactly one level. Collection, health and collect endpoints
//! return their payload as-is. Each entity client picks the rule per
//! endpoint; the two must not be unified without changing the backend.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::io::HttpResponse;
use crate::ApiError;

/// `{"data": ...}` wrapper returned by register and update endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Turn a non-2xx response into the matching [`ApiError`]
pub fn check_status(response: HttpResponse) -> crate::Result<HttpResponse> {
    if response.is_success() {
        return Ok(response);
    }

    let status = response.status;
    let message = error_message(status, &response.body);
    tracing::debug!("Backend rejected request: {} {}", status, message);

    Err(match status {
        400 | 422 => ApiError::Validation { status, message },
        404 => ApiError::NotFound { status, message },
        409 => ApiError::Conflict { status, message },
        _ => ApiError::Request { status, message },
    })
}

/// Decode a mutation response, unwrapping the `data` envelope
pub fn decode_enveloped<T: DeserializeOwned>(response: HttpResponse) -> crate::Result<T> {
    let response = check_status(response)?;
    let mut value = parse_body(&response.body)?;

    let data = value
        .get_mut("data")
        .map(Value::take)
        .ok_or_else(|| ApiError::UnexpectedResponse("missing `data` envelope".to_string()))?;

    serde_json::from_value(data)
        .map_err(|e| ApiError::UnexpectedResponse(format!("Decoding `data`: {}", e)))
}

/// Decode a collection or health response as-is
pub fn decode_raw<T: DeserializeOwned>(response: HttpResponse) -> crate::Result<T> {
    let response = check_status(response)?;
    serde_json::from_str(&response.body)
        .map_err(|e| ApiError::UnexpectedResponse(format!("Decoding payload: {}", e)))
}

fn parse_body(body: &str) -> crate::Result<Value> {
    serde_json::from_str(body)
        .map_err(|e| ApiError::UnexpectedResponse(format!("Response body is not JSON: {}", e)))
}

/// Best-effort human readable message for an error response
fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let detail = ["detail", "message", "error"]
            .iter()
            .find_map(|key| value.get(*key));
        match detail {
            Some(Value::String(s)) => return s.clone(),
            Some(other) => return other.to_string(),
            None => {}
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown status")
        .to_string()
}
