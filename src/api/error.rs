//! Error classification for backend calls.

use thiserror::Error;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// Failed to reach the server or read its response.
    #[error("Connection failed to '{url}': {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout.
    #[error("Request to '{url}' timed out")]
    Timeout { url: String },

    /// Backend answered with a non-success status.
    #[error("Backend error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Request could not be built from the given parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub(crate) fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            ApiError::Timeout {
                url: url.to_string(),
            }
        } else {
            ApiError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }

    /// Get error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Client { .. } => "client_error",
            ApiError::Transport { .. } => "connection_error",
            ApiError::Timeout { .. } => "request_timeout",
            ApiError::Status { .. } => "backend_error",
            ApiError::Decode { .. } => "decode_error",
            ApiError::InvalidRequest(_) => "invalid_request",
        }
    }

    /// True when the backend rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

/// Pull a human-readable message out of an error body.
///
/// Prefers a JSON `message` (string or list of strings), then `error`,
/// then the raw text.
pub(crate) fn error_message(body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            match value.get(key) {
                Some(serde_json::Value::String(text)) => return text.clone(),
                Some(serde_json::Value::Array(items)) => {
                    let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
                    if !parts.is_empty() {
                        return parts.join(", ");
                    }
                }
                _ => {}
            }
        }
    }
    String::from_utf8_lossy(body).trim().to_string()
}
