//! Error types for text-to-image-canvas.

use thiserror::Error;

/// Result type alias using CanvasError.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur during text measurement and rendering.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Invalid canvas dimensions (must be positive and within limits).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Font size was zero, negative, or not finite.
    #[error("Invalid font size: {0} (must be positive and finite)")]
    InvalidFontSize(f32),

    /// Failed to load a font face from disk.
    #[error("Failed to load font face from {path}: {reason}")]
    FontLoad { path: String, reason: String },

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    Png(String),
}

impl From<png::EncodingError> for CanvasError {
    fn from(err: png::EncodingError) -> Self {
        CanvasError::Png(err.to_string())
    }
}
