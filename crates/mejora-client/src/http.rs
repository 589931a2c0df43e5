//! Shared HTTP response helpers.
//!
//! Centralizes the non-success → [`ApiError::Api`] conversion so resource
//! wrappers stay focused on request construction and payload mapping.

use crate::error::ApiError;

/// Return the response unchanged on success; otherwise convert it into
/// [`ApiError::Api`] carrying the server's message.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = extract_message(&body, status);
    tracing::debug!(status = status.as_u16(), %message, "API call failed");
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Pick the most useful message out of an error body.
///
/// Order: JSON `message`, JSON `error`, raw body text, status reason.
fn extract_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(serde_json::Value::as_str)
                && !text.trim().is_empty()
            {
                return text.trim().to_string();
            }
        }
    }

    let raw = body.trim();
    if !raw.is_empty() && !raw.starts_with('{') {
        return raw.to_string();
    }

    status
        .canonical_reason()
        .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string)
}
