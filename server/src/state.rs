//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no data of its own; it holds the pooled HTTP client used to
//! forward `/api/*` and the backend origin.

use std::sync::Arc;
use std::time::Duration;

const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Build state for `backend_url`. Only connecting is time-limited;
    /// uploads and streams may run long.
    ///
    /// # Errors
    ///
    /// Returns the client builder error if TLS initialization fails.
    pub fn new(backend_url: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, backend_url: Arc::from(backend_url) })
    }
}
