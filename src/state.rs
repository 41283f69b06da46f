//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled `reqwest` client reused for every
//! forwarded request.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HostConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with an upstream client honoring the configured timeouts.
    /// Redirects are passed back to the browser untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
