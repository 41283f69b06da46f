//! Failure classification for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-success statuses are kept distinct here for
//! logging, but views collapse both into one inline message through
//! `detail_or`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a raw response body, keeping the backend
    /// `detail` when the body has one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message());
        Self::Status { status, detail }
    }

    /// The backend-provided detail, or `fallback` for every other failure.
    pub fn detail_or(&self, fallback: &str) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            _ => fallback.to_owned(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
