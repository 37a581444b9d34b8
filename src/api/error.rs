//! Normalized error type for all remote calls.
//!
//! The API client is the sole translation boundary: every transport,
//! timeout, and HTTP failure is converted into one [`ApiError`] before it
//! reaches business logic. Call sites above this layer never see raw
//! `reqwest` errors.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured error body the server attaches to non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
}

/// Errors that can occur while talking to the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request exceeded its deadline. Carries no status code.
    #[error("request timeout: {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// Transport-level failure (DNS, connection refused, offline).
    #[error("network error: unable to reach the server at {url}: {source}")]
    Network {
        /// The URL that could not be reached.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response. `message` is the parsed structured error when the
    /// body had one, otherwise `"HTTP <status>: <status text>"`.
    #[error("{message}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// Human-readable one-line message.
        message: String,
        /// The structured remote error payload, when parseable.
        remote: Option<RemoteError>,
    },

    /// 2xx response whose non-empty body did not match the expected type.
    #[error("invalid response body from {url}: {source}")]
    InvalidBody {
        /// The URL whose response failed to decode.
        url: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Anything else, wrapped with its message.
    #[error("{message}")]
    Unknown {
        /// Human-readable description of the failure.
        message: String,
    },
}

impl ApiError {
    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates an invalid-body error.
    pub fn invalid_body(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidBody {
            url: url.into(),
            source,
        }
    }

    /// Creates an unknown error.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Builds the HTTP-error variant from a status and the raw response body.
    ///
    /// Attempts to parse the structured `{error, message}` payload, preferring
    /// `message` over `error` for display; an absent or unparseable body falls
    /// back to `"HTTP <status>: <status text>"`.
    #[must_use]
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let fallback = match status.canonical_reason() {
            Some(reason) => format!("HTTP {}: {reason}", status.as_u16()),
            None => format!("HTTP {}", status.as_u16()),
        };

        let remote = serde_json::from_str::<RemoteError>(body)
            .ok()
            .filter(|remote| !remote.error.is_empty() || !remote.message.is_empty());
        let message = remote
            .as_ref()
            .map(|remote| {
                if remote.message.is_empty() {
                    remote.error.clone()
                } else {
                    remote.message.clone()
                }
            })
            .unwrap_or(fallback);

        Self::Http {
            status: status.as_u16(),
            message,
            remote,
        }
    }

    /// Returns the HTTP status code, when the error carries one.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the API layer.
pub type ApiResult<T> = Result<T, ApiError>;
