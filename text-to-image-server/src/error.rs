//! Request error type and HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use text_to_image_canvas::CanvasError;
use thiserror::Error;

/// Errors terminating a request.
///
/// Every failure maps to a plain-text status response; no partial image bytes
/// are ever written. Nothing is retried internally.
#[derive(Debug, Error)]
pub enum AppError {
    /// The text segment was missing or empty after decoding/sanitization.
    #[error("text segment is empty")]
    EmptyText,

    /// The configured font could not be loaded.
    #[error("failed to load font face")]
    FontLoad(#[source] CanvasError),

    /// Rendering or PNG encoding failed.
    #[error("failed to encode image")]
    Render(#[source] CanvasError),
}

impl From<CanvasError> for AppError {
    fn from(err: CanvasError) -> Self {
        match err {
            CanvasError::FontLoad { .. } | CanvasError::InvalidFontSize(_) => {
                AppError::FontLoad(err)
            }
            other => AppError::Render(other),
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyText => StatusCode::BAD_REQUEST,
            AppError::FontLoad(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::EmptyText => log::warn!("rejecting request: {}", self),
            AppError::FontLoad(source) | AppError::Render(source) => {
                log::error!("{}: {}", self, source)
            }
        }
        (self.status(), self.to_string()).into_response()
    }
}
