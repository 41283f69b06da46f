//! Host error types.
//!
//! ERROR HANDLING
//! ==============
//! `HostError` covers startup and ends the process from `main`. `ProxyError`
//! is per-request and becomes a JSON `{"detail": ...}` response, the same
//! shape the backend uses, so the client shows it like any backend error.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::config::ConfigError;

pub const BACKEND_UNAVAILABLE_DETAIL: &str = "Backend unavailable";

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client init failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, status = status.as_u16(), "proxy request failed");
        (status, Json(serde_json::json!({ "detail": BACKEND_UNAVAILABLE_DETAIL }))).into_response()
    }
}
