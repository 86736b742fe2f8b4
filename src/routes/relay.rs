//! Relay handler
//!
//! Accepts `POST ?target=<name>` on any path and forwards it to the matching
//! upstream. Other methods are refused.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{HeaderMap, Method, Uri},
    response::Response,
};
use http_body_util::BodyExt;
use tracing::{info, warn};

use crate::{
    error::{AppError, AppResult},
    proxy::Target,
    AppState,
};

/// Resolve the upstream named by the request's query string
///
/// Only the first `target` pair counts; later repeats are ignored.
pub fn target_from_uri(uri: &Uri) -> AppResult<Target> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map_err(|_| AppError::InvalidTarget)?;

    pairs
        .iter()
        .find(|(key, _)| key == "target")
        .map(|(_, value)| value.as_str())
        .ok_or(AppError::InvalidTarget)?
        .parse()
}

/// Relay handler for every path
pub async fn relay(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> AppResult<Response> {
    if method != Method::POST {
        warn!(method = %method, path = %uri.path(), "Rejected method");
        return Err(AppError::MethodNotAllowed);
    }

    let target = target_from_uri(&uri).map_err(|e| {
        warn!(query = uri.query().unwrap_or(""), "Rejected target parameter");
        e
    })?;

    info!(target = %target, path = %uri.path(), "Processing relay request");

    let body = body
        .collect()
        .await
        .map_err(|e| AppError::Forwarding(format!("Failed to read request body: {}", e)))?
        .to_bytes();

    state.forwarder.forward(target, &headers, body).await
}
