//! Error types for the remote dog service client.

use thiserror::Error;

/// Errors that can occur while talking to the dog service.
#[derive(Debug, Error)]
pub enum DogApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    /// Failed to reach the service or read its response.
    #[error("Connection to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the total timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The service answered with a non-success status and no usable payload.
    #[error("Service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not a valid dogs payload.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl DogApiError {
    /// Short classification used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DogApiError::ClientBuild { .. } => "client_build",
            DogApiError::Transport { .. } => "transport",
            DogApiError::Timeout { .. } => "timeout",
            DogApiError::Status { .. } => "status",
            DogApiError::Decode { .. } => "decode",
        }
    }
}
