//! Request forwarding
//!
//! Turns one inbound POST into one upstream POST and builds the relayed
//! response. Errors are returned, never converted here.

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::http::{HeaderMap, Response};
use bytes::Bytes;
use tracing::{debug, info, instrument};

use crate::error::{AppError, AppResult};
use crate::proxy::headers::{outbound_headers, relay_response_headers};
use crate::proxy::target::Target;
use crate::proxy::upstream::{OutboundRequest, Upstream};

/// Relays requests to the upstream selected by [`Target`]
#[derive(Clone)]
pub struct Forwarder {
    upstream: Arc<dyn Upstream>,
}

impl Forwarder {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }

    /// Forward a request body and headers to `target`
    ///
    /// The body is sent byte for byte. The upstream status and body come back
    /// unchanged, headers gain `Access-Control-Allow-Origin: *`.
    #[instrument(skip(self, incoming_headers, body), fields(target = %target, transport = self.upstream.name()))]
    pub async fn forward(
        &self,
        target: Target,
        incoming_headers: &HeaderMap,
        body: Bytes,
    ) -> AppResult<Response<Body>> {
        let start_time = Instant::now();
        let url = target.upstream_url();
        let headers = outbound_headers(incoming_headers);

        debug!(
            inbound_headers = incoming_headers.len(),
            outbound_headers = headers.len(),
            "Prepared outbound headers"
        );
        info!(url = %url, body_len = body.len(), "Forwarding request upstream");

        let upstream_response = self
            .upstream
            .send(OutboundRequest {
                url: url.to_string(),
                headers,
                body,
            })
            .await?;

        info!(
            status = %upstream_response.status,
            body_len = upstream_response.body.len(),
            duration_ms = %format!("{:.2}", start_time.elapsed().as_secs_f64() * 1000.0),
            "Upstream request completed"
        );

        let mut response = Response::builder()
            .status(upstream_response.status)
            .body(Body::from(upstream_response.body))
            .map_err(|e| AppError::Forwarding(format!("Failed to build response: {}", e)))?;
        *response.headers_mut() = relay_response_headers(&upstream_response.headers);

        Ok(response)
    }
}
