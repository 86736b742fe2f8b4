//! HTTP routes for the relay
//!
//! Every path is served by the same handler. CORS preflight requests are
//! answered by the CORS layer before they reach it.

pub mod relay;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer, Vary},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(relay::relay)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// CORS policy granted to browser clients
///
/// Any `OPTIONS` request is treated as a preflight and answered with an
/// empty 200 without calling the relay handler. No `Vary` is added: the
/// origin is a wildcard, and relayed responses keep the upstream's own `Vary`.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-goog-api-key"),
            header::AUTHORIZATION,
        ])
        .vary(Vary::list(Vec::<HeaderName>::new()))
}
