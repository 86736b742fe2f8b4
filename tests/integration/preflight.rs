//! CORS preflight and method handling tests
//!
//! - OPTIONS on any path - preflight answered without an upstream call
//! - Methods other than POST/OPTIONS - 405

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method, StatusCode};

use crate::common::{test_server, RecordingUpstream};

fn header_str(response: &axum_test::TestResponse, name: header::HeaderName) -> String {
    response
        .headers()
        .get(name)
        .map(|v| v.to_str().unwrap().to_ascii_lowercase())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_preflight_returns_empty_ok_with_cors_headers() {
    let upstream = Arc::new(RecordingUpstream::responding(StatusCode::OK, "{}"));
    let server = test_server(upstream.clone());

    let response = server
        .method(Method::OPTIONS, "/")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("https://example.github.io"),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .await;

    response.assert_status_ok();
    assert!(response.as_bytes().is_empty(), "Preflight body should be empty");

    assert_eq!(header_str(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");

    let methods = header_str(&response, header::ACCESS_CONTROL_ALLOW_METHODS);
    assert!(methods.contains("post"), "Allowed methods: {methods}");
    assert!(methods.contains("options"), "Allowed methods: {methods}");

    let allowed = header_str(&response, header::ACCESS_CONTROL_ALLOW_HEADERS);
    for name in ["content-type", "x-goog-api-key", "authorization"] {
        assert!(allowed.contains(name), "{name} missing from {allowed}");
    }

    assert!(upstream.requests().is_empty(), "Preflight must not call upstream");
}

#[tokio::test]
async fn test_preflight_without_origin_on_any_path() {
    let upstream = Arc::new(RecordingUpstream::responding(StatusCode::OK, "{}"));
    let server = test_server(upstream.clone());

    for path in ["/", "/v1/chat/completions", "/anything"] {
        let response = server.method(Method::OPTIONS, path).await;

        response.assert_status_ok();
        assert!(response.as_bytes().is_empty());
        assert_eq!(header_str(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    }

    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn test_other_methods_are_not_allowed() {
    let upstream = Arc::new(RecordingUpstream::responding(StatusCode::OK, "{}"));
    let server = test_server(upstream.clone());

    let response = server.get("/").add_query_param("target", "openai").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.text(), "Method Not Allowed");

    let response = server.put("/").add_query_param("target", "gemini").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);

    let response = server.delete("/v1/chat/completions").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);

    let response = server.patch("/").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);

    assert!(upstream.requests().is_empty());
}
