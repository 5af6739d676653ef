//! Client error types.

use thiserror::Error;

/// Errors from the comment-fetch worker call.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("comment service request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("comment service returned {status}: {detail}")]
    Status {
        status: reqwest::StatusCode,
        detail: String,
    },
}

/// Errors from the model service call.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("model request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("model service returned {status}: {detail}")]
    Status {
        status: reqwest::StatusCode,
        detail: String,
    },

    #[error("model response contained no content")]
    EmptyResponse,
}
