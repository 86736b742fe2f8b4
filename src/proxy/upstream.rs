//! Upstream transport abstraction
//!
//! The forwarder talks to upstreams through the [`Upstream`] trait so the
//! network hop can be replaced in tests. [`HttpUpstream`] is the reqwest
//! implementation used by the server.

use async_trait::async_trait;
use axum::http::{HeaderMap, StatusCode};
use bytes::Bytes;
use tracing::{debug, error};

use crate::error::AppResult;

/// A request ready to be sent upstream
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// What the upstream answered, body fully read
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Sends one POST to an upstream and reads back the whole response
///
/// Any transport or body-read failure must come back as
/// `AppError::Forwarding`.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Transport name for logging
    fn name(&self) -> &'static str;

    async fn send(&self, request: OutboundRequest) -> AppResult<UpstreamResponse>;
}

/// reqwest-backed upstream transport
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    /// Create a new transport over a shared client
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn send(&self, request: OutboundRequest) -> AppResult<UpstreamResponse> {
        let OutboundRequest { url, headers, body } = request;

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Failed to send request upstream");
                e
            })?;

        let status = response.status();
        let headers = response.headers().clone();
        debug!(url = %url, status = %status, "Received upstream response headers");

        let body = response.bytes().await.map_err(|e| {
            error!(url = %url, error = %e, "Failed to read upstream response body");
            e
        })?;

        Ok(UpstreamResponse {
            status,
            headers,
            body,
        })
    }
}
