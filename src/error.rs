//! Error types for the relay
//!
//! Every failure a request can hit is an [`AppError`]. The `IntoResponse`
//! impl below is the only place errors turn into HTTP responses.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message returned for a missing or unknown `target` parameter
pub const INVALID_TARGET_MESSAGE: &str =
    "Invalid target parameter. Use ?target=openai, ?target=gemini, or ?target=perplexity";

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("{}", INVALID_TARGET_MESSAGE)]
    InvalidTarget,

    /// Anything that went wrong while talking to the upstream or reading a body
    #[error("{0}")]
    Forwarding(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Forwarding(err.to_string())
    }
}

/// JSON body for forwarding failures
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, self.to_string()).into_response()
            }
            AppError::InvalidTarget => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
            AppError::Forwarding(message) => {
                let mut response = (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { error: message }),
                )
                    .into_response();
                response.headers_mut().insert(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                );
                response
            }
        }
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
