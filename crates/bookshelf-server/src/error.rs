//! API error types rendered as JSON envelopes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::{Envelope, STATUS_ERROR, STATUS_FAIL};

/// API error that can be returned from handlers.
///
/// Each variant carries the user-facing message verbatim; the rendered
/// envelope `status` is `fail` for client-caused errors and `error` for
/// internal ones.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400): missing required field or an invalid
    /// readPage/pageCount relationship.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Not found (404): unknown identifier.
    #[error("not found: {0}")]
    NotFound(String),

    /// Update target missing, answered as 500 with a `fail` envelope.
    /// Used by the note edit endpoint, which reports an unknown id as an
    /// internal failure rather than a 404.
    #[error("update failed: {0}")]
    UpdateFailed(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Envelope status string for this error.
    pub fn envelope_status(&self) -> &'static str {
        match self {
            Self::BadRequest(_) | Self::NotFound(_) | Self::UpdateFailed(_) => STATUS_FAIL,
            Self::Internal(_) => STATUS_ERROR,
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UpdateFailed(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The user-facing message, without the Display prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(m) | Self::NotFound(m) | Self::UpdateFailed(m) | Self::Internal(m) => {
                m
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Envelope::failure(self.envelope_status(), self.message());

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
