//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the upstream backend; handlers keep no
//! other shared mutable state.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream_url: Option<Arc<str>>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// initialization failure).
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .build()?;
        Ok(Self { http, upstream_url: config.upstream_url.as_deref().map(Arc::from) })
    }
}
