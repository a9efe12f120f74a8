//! HTTP error taxonomy.
//!
//! Domain errors are converted into an [`ApiError`] at the handler boundary.
//! The response body is always `{ "error": <message>, "code": <code> }`; the
//! underlying error is logged here, not sent to the client.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::error::ErrorCode;
use crate::services::chat::ChatError;
use crate::services::library::LibraryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    BadRequest,
    PayloadTooLarge,
    UnsupportedFormat,
    NotFound,
    UpstreamFailure,
    ExtractionFailure,
    InternalFailure,
}

impl ApiErrorKind {
    #[must_use]
    pub fn status(self) -> StatusCode {
        match self {
            Self::BadRequest | Self::UnsupportedFormat => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::UpstreamFailure => StatusCode::BAD_GATEWAY,
            Self::ExtractionFailure | Self::InternalFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, code: &'static str, message: impl Into<String>) -> Self {
        Self { kind, code, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::BadRequest, "E_BAD_REQUEST", message)
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match &err {
            ChatError::Upstream(inner) => {
                error!(error = %inner, retryable = err.retryable(), "chat upstream failure");
                Self::new(ApiErrorKind::UpstreamFailure, err.error_code(), "Failed to reach the generation server")
            }
        }
    }
}

impl From<LibraryError> for ApiError {
    fn from(err: LibraryError) -> Self {
        let code = err.error_code();
        match &err {
            LibraryError::UnsupportedFormat { .. } => {
                Self::new(ApiErrorKind::UnsupportedFormat, code, "Unsupported file format")
            }
            LibraryError::NotFound(_) => Self::new(ApiErrorKind::NotFound, code, "Book not found"),
            LibraryError::Extract(_) | LibraryError::ExtractTimeout { .. } => {
                error!(error = %err, "book extraction failed");
                Self::new(ApiErrorKind::ExtractionFailure, code, "Failed to process book")
            }
            LibraryError::Io(_) | LibraryError::Task(_) => {
                error!(error = %err, "book upload failed");
                Self::new(ApiErrorKind::InternalFailure, code, "Failed to process book")
            }
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        warn!(error = %err, "malformed multipart upload");
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::new(ApiErrorKind::PayloadTooLarge, "E_PAYLOAD_TOO_LARGE", "Upload too large")
        } else {
            Self::bad_request(err.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({ "error": self.message, "code": self.code });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
