//! Header handling for relayed requests
//!
//! Client headers, credentials included, are passed to the upstream as-is.
//! The client holds its own API key; the relay never injects one.

use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};

/// Hop-by-hop headers that must never be forwarded
const HOP_BY_HOP_HEADERS: &[HeaderName] = &[
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Check if a header is a hop-by-hop header that should not be forwarded
pub fn is_hop_by_hop_header(name: &HeaderName) -> bool {
    HOP_BY_HOP_HEADERS.contains(name) || name.as_str() == "keep-alive"
}

/// Build the header set sent upstream
///
/// Copies every inbound header except `Host`, so reqwest addresses the
/// upstream host rather than the relay's own.
pub fn outbound_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(incoming.len());

    for (name, value) in incoming {
        if *name == header::HOST || is_hop_by_hop_header(name) {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }

    headers
}

/// Build the header set returned to the client
///
/// Upstream headers are copied and `Access-Control-Allow-Origin: *` is set,
/// replacing whatever the upstream sent.
pub fn relay_response_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(upstream.len() + 1);

    for (name, value) in upstream {
        if !is_hop_by_hop_header(name) {
            headers.append(name.clone(), value.clone());
        }
    }

    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    headers
}
