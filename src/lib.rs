//! ai-relay - CORS-friendly relay for AI completion APIs
//!
//! This library provides the core functionality for the relay server.
//! Browser clients POST to it with `?target=openai|gemini|perplexity` and
//! their own credentials; the request is forwarded to the fixed upstream and
//! the answer is returned with a permissive CORS header.

pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;

use std::sync::Arc;

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::proxy::{Forwarder, HttpUpstream, Target, Upstream};

/// Application state shared across all request handlers
///
/// Nothing in here changes after startup.
pub struct AppState {
    pub config: Config,
    /// Forwarder relaying requests to the upstream APIs
    pub forwarder: Forwarder,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // No request timeout: upstream calls are bounded by the network stack only
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .build()?;

        let upstream: Arc<dyn Upstream> = Arc::new(HttpUpstream::new(http_client));

        Ok(Self::with_upstream(config, upstream))
    }

    /// Create an application state over a caller-supplied upstream transport
    pub fn with_upstream(config: Config, upstream: Arc<dyn Upstream>) -> Self {
        Self {
            config,
            forwarder: Forwarder::new(upstream),
        }
    }
}
