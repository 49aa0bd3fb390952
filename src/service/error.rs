//! Handler failures and their JSON rendering.
//!
//! Every failure the API reports, including bodies axum cannot parse,
//! goes out as a `{"detail": ...}` object.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::models::ErrorBody;
use crate::error::EngineError;

/// Failures a handler reports to the client.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    RateLimited,
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded. Please try again later.".to_string(),
            ),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
