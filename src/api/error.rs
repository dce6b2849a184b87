//! API error types for the JIRA client.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the JIRA API.
///
/// Every variant is terminal for the call that produced it; nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or connection failure.
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The request did not finish within the configured ceiling.
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// JIRA answered with a non-success status code.
    #[error("JIRA returned {status}: {body}")]
    RemoteStatus { status: StatusCode, body: String },

    /// The payload was not valid JSON or did not match the expected shape.
    #[error("Invalid API response: {0}")]
    Parse(String),

    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Classify a reqwest failure, surfacing timeouts as their own kind.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(timeout)
        } else if err.is_builder() {
            ApiError::InvalidUrl(err.to_string())
        } else {
            ApiError::Transport(err)
        }
    }

    /// Build a status error, condensing JIRA's JSON error body when present.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        ApiError::RemoteStatus {
            status,
            body: summarize_error_body(body),
        }
    }

    /// Whether this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout(_))
    }

    /// Whether the server rejected our credentials.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ApiError::RemoteStatus { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}

/// Extract the human-readable part of a JIRA error body.
///
/// JIRA usually returns `{"errorMessages": [...], "errors": {...}}`; anything
/// else is passed through trimmed.
fn summarize_error_body(body: &str) -> String {
    let body = body.trim();
    let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };

    let mut parts: Vec<String> = json
        .get("errorMessages")
        .and_then(|m| m.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if let Some(obj) = json.get("errors").and_then(|e| e.as_object()) {
        parts.extend(obj.iter().map(|(k, v)| match v.as_str() {
            Some(s) => format!("{}: {}", k, s),
            None => format!("{}: {}", k, v),
        }));
    }

    if parts.is_empty() {
        body.to_string()
    } else {
        parts.join(", ")
    }
}
