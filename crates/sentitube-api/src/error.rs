//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use sentitube_client::{ClassifyError, FetchError};

pub type ApiResult<T> = Result<T, ApiError>;

/// Everything that halts an analysis request. Each stage's failure maps to
/// one variant; no variant is ever retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Comment fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Classification failed: {0}")]
    Classify(#[from] ClassifyError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidUrl(_) => StatusCode::UNPROCESSABLE_ENTITY,
            // Upstream collaborators failed; our server is fine
            ApiError::Fetch(_) | ApiError::Classify(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Fetch/classify causes are surfaced verbatim so the user sees why
        // their request failed; only internal details are redacted.
        let detail = match &self {
            ApiError::Internal(_) => {
                if std::env::var("ENVIRONMENT").unwrap_or_default() == "production" {
                    "An internal error occurred".to_string()
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse { detail };

        (status, Json(body)).into_response()
    }
}
