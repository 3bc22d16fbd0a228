//! Unified SDK error types.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("NetworkCamp SDK request failed after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// A non-success response from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Canonical reason phrase for the status (may be empty).
    pub status_text: String,
    /// The `error` field of the response body, when it decoded.
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(status: u16, status_text: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            detail,
        }
    }

    /// Build from a status and the raw response body.
    ///
    /// The body is decoded best-effort: anything that is not a JSON object with
    /// an `error` field leaves `detail` empty.
    pub fn from_body(status: u16, status_text: impl Into<String>, body: &[u8]) -> Self {
        let detail = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) => parsed.detail(),
            Err(_) => None,
        };
        Self::new(status, status_text, detail)
    }

    /// Fixed hint appended for statuses with a well-known cause.
    pub fn hint(&self) -> Option<&'static str> {
        match self.status {
            401 => Some("Unauthorized: check your API key"),
            429 => Some("Rate limit exceeded: slow down requests"),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NetworkCamp API error: {} {}", self.status, self.status_text)?;
        if let Some(detail) = &self.detail {
            write!(f, " - {}", detail)?;
        }
        if let Some(hint) = self.hint() {
            write!(f, " ({})", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Error response format from the API.
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Empty and falsy values carry no detail.
    fn detail(self) -> Option<String> {
        match self.error? {
            serde_json::Value::Null | serde_json::Value::Bool(false) => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}
