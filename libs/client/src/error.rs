//! Custom error types for the client SDK
//!
//! Callers distinguish failure kinds by variant, never by message text: a
//! session expiry must interrupt the current flow, while transport and decode
//! failures are reported in place.

use common::error::StorageError;
use thiserror::Error;

/// Custom error type for API calls
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend invalidated the session; the user must log in again
    #[error("Session expired, please log in again")]
    SessionExpired,

    /// Network-level failure (unreachable host, timeout)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON shape the endpoint promises
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Local storage failure while persisting session state
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input rejected before any request was issued
    #[error("Invalid input: {0}")]
    Validation(String),
}

impl ApiError {
    /// True when the failure means the user has to authenticate again
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
