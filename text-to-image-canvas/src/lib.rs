//! Text measurement and centered PNG rendering using tiny-skia and cosmic-text.
//!
//! This crate turns a string into a PNG image: transparent background, black
//! glyphs, text centered on a canvas sized to the measured text extent plus
//! padding. It uses:
//! - `tiny-skia` for rasterization
//! - `cosmic-text` for text shaping and measurement
//! - `fontdb` for font loading
//! - `png` for encoding
//!
//! # Example
//!
//! ```rust,ignore
//! use text_to_image_canvas::{render_text_image, FontFace};
//!
//! let face = FontFace::load("./fonts/LiberationSans-Regular.ttf", 24.0)?;
//! let png_data = render_text_image("Hi", &face, 10.0)?;
//! ```

mod canvas;
mod error;
mod font;
mod text;

pub use canvas::Canvas;
pub use error::{CanvasError, CanvasResult};
pub use font::FontFace;
pub use text::Extent;

/// Side length of the throwaway canvas used for the measurement pass.
const SCRATCH_SIZE: u32 = 100;

/// Render `text` centered on a transparent canvas and encode it as PNG.
///
/// Two-pass: the text is measured on a small scratch canvas, which is then
/// discarded and a final canvas allocated at `ceil(extent + 2 * padding)` per
/// axis (minimum 1px). The text's bounding-box center is anchored at the
/// canvas center, drawn in opaque black, clipped to the canvas bounds.
///
/// The same font face drives both passes, so the measured extent is exactly
/// the footprint the final draw needs.
pub fn render_text_image(text: &str, face: &FontFace, padding: f32) -> CanvasResult<Vec<u8>> {
    let mut scratch = Canvas::new(SCRATCH_SIZE, SCRATCH_SIZE, face)?;
    let extent = scratch.measure_text(text);
    drop(scratch);

    let width = ((extent.width + 2.0 * padding).ceil() as u32).max(1);
    let height = ((extent.height + 2.0 * padding).ceil() as u32).max(1);

    log::debug!(target: "canvas", "measured {:?} as {}x{}, canvas {}x{}", text, extent.width, extent.height, width, height);

    let mut canvas = Canvas::new(width, height, face)?;
    canvas.clip_to_bounds();
    canvas.draw_text_anchored(text, width as f32 / 2.0, height as f32 / 2.0, 0.5, 0.5);
    canvas.to_png()
}
