//! Error types for the REST client.

use thiserror::Error;

/// Longest response body excerpt kept in an error
const MAX_BODY_EXCERPT: usize = 200;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connection, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("API error: {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Create a status error, keeping only the start of the body
    pub fn status(status: reqwest::StatusCode, body: &str) -> Self {
        let body = match body.char_indices().nth(MAX_BODY_EXCERPT) {
            Some((idx, _)) => format!("{}...", &body[..idx]),
            None => body.to_string(),
        };
        Self::Status { status, body }
    }

    /// HTTP status of the failed response, if there was one
    pub fn status_code(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(err) => err.status(),
            Self::Decode { .. } => None,
        }
    }
}
