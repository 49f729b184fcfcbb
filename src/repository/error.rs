use thiserror::Error;

use crate::api::DogApiError;

/// Why a dog fetch failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The service could not be reached or answered unusably.
    #[error(transparent)]
    Transport(#[from] DogApiError),

    /// The service answered but reported an error of its own.
    #[error("Service reported an error: {message}")]
    ServiceReported { message: String },
}

impl FetchError {
    /// Short classification used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(inner) => inner.kind(),
            FetchError::ServiceReported { .. } => "service_reported",
        }
    }
}
