//! Router and request handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use text_to_image_canvas::{render_text_image, FontFace};

use crate::config::Config;
use crate::error::AppError;
use crate::sanitize;

/// Transparent margin added around the measured text, per side and axis.
const TEXT_PADDING: f32 = 10.0;

/// Build the application router.
pub fn app(config: Config) -> Router {
    Router::new()
        .route("/health", get(health))
        // An absent text segment is a client error, not a 404.
        .route("/text-to-image", get(missing_text))
        .route("/text-to-image/", get(missing_text))
        .route("/text-to-image/:text", get(text_to_image))
        .with_state(Arc::new(config))
}

async fn health() -> &'static str {
    "OK"
}

async fn missing_text() -> AppError {
    AppError::EmptyText
}

/// `GET /text-to-image/:text` — render the decoded path segment as a PNG.
async fn text_to_image(
    State(config): State<Arc<Config>>,
    Path(text): Path<String>,
) -> Result<Response, AppError> {
    log::debug!("raw text segment: {:?}", text);

    // The Path extractor has already percent-decoded the segment.
    let text = if config.sanitize_text {
        sanitize::sanitize_text(&text)
    } else {
        text
    };
    log::debug!("render text: {:?}", text);

    if text.is_empty() {
        return Err(AppError::EmptyText);
    }

    // The font is loaded per request; the service keeps no cross-request
    // state beyond the immutable config. Rendering is synchronous CPU-bound
    // work within this request's task.
    let face = FontFace::load(&config.font_path, config.font_size)?;
    let png_data = render_text_image(&text, &face, TEXT_PADDING)?;

    log::info!("rendered {:?} as {} PNG bytes", text, png_data.len());

    let filename = sanitize::filename_for(&text);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}.png\""),
            ),
        ],
        png_data,
    )
        .into_response())
}
