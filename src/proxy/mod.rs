//! Proxy module
//!
//! Handles request forwarding to the upstream AI APIs.

pub mod forwarder;
pub mod headers;
pub mod target;
pub mod upstream;

pub use forwarder::Forwarder;
pub use target::Target;
pub use upstream::{HttpUpstream, OutboundRequest, Upstream, UpstreamResponse};
