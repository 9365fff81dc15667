//! HTTP error mapping.
//!
//! One error type crosses the handler boundary; each variant maps to a
//! status code and a user-safe JSON body. Internal detail stays in the
//! logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use darkroom_core::PipelineError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Core pipeline failure (decode, payload, lookup, ...)
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Malformed multipart request
    #[error("Malformed multipart request: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    /// Required form/multipart field missing
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Page template failed to render
    #[error("Template rendering failed: {0}")]
    Template(#[from] minijinja::Error),

    /// Blocking worker task failed
    #[error("Worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Pipeline(PipelineError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Pipeline(PipelineError::UploadTooLarge { .. }) => {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            ApiError::Pipeline(PipelineError::Encode { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Pipeline(_) => StatusCode::BAD_REQUEST,
            ApiError::Multipart(_) | ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::Template(_) | ApiError::Join(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-safe message, without internal detail.
    fn user_message(&self) -> String {
        match self {
            ApiError::Pipeline(PipelineError::NotFound { .. }) => "Image not found".to_string(),
            ApiError::Pipeline(PipelineError::InvalidPayload { .. }) => {
                "Invalid image data".to_string()
            }
            ApiError::Template(_) | ApiError::Join(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Internal service error: {:#}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}
