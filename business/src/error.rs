use thiserror::Error;

use crate::http::HttpError;

/// Failure loading users from the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("API returned status: {status}")]
    Status { status: u16 },

    #[error("Failed to parse users response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The background load stopped before producing a result.
    #[error("Users loader failed: {0}")]
    Runtime(String),
}

/// Failure mutating the in-memory user store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("User not found: {id}")]
    NotFound { id: u64 },
}

impl StoreError {
    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
