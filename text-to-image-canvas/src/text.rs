//! Text measurement using cosmic-text.

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};

use crate::font::FontFace;

/// Pixel footprint a string occupies when rendered with a given font face.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extent {
    /// Width of the text in pixels.
    pub width: f32,
    /// Height of the text in pixels.
    pub height: f32,
}

/// Shape `text` single-line and return a laid-out buffer.
///
/// The buffer is unsized, so no line wrapping occurs; layout depends only on
/// the text and the font face, never on canvas dimensions.
pub(crate) fn shape_text(font_system: &mut FontSystem, text: &str, face: &FontFace) -> Buffer {
    let size_px = face.size_px();
    let metrics = Metrics::new(size_px, size_px * 1.2);
    let mut buffer = Buffer::new(font_system, metrics);

    let attrs = Attrs::new().family(Family::Name(face.family()));

    buffer.set_text(font_system, text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);
    buffer
}

/// Measure the extent of `text` rendered with `face`.
///
/// Width is the widest layout run; height is the bottom of the lowest run.
/// Empty text yields a zero extent.
pub(crate) fn measure_text(font_system: &mut FontSystem, text: &str, face: &FontFace) -> Extent {
    // An empty string still lays out as one empty line; report zero instead
    // of a full line height.
    if text.is_empty() {
        return Extent::default();
    }

    let buffer = shape_text(font_system, text, face);

    let mut width: f32 = 0.0;
    let mut height: f32 = 0.0;
    for run in buffer.layout_runs() {
        width = width.max(run.line_w);
        height = height.max(run.line_top + run.line_height);
    }

    Extent { width, height }
}

/// X offset placing the fraction `ax` of a box of `width` at the anchor point.
pub(crate) fn anchor_x_offset(width: f32, ax: f32) -> f32 {
    -width * ax
}

/// Y offset placing the fraction `ay` of a box of `height` at the anchor point.
pub(crate) fn anchor_y_offset(height: f32, ay: f32) -> f32 {
    -height * ay
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_offsets_center_the_box() {
        assert_eq!(anchor_x_offset(100.0, 0.5), -50.0);
        assert_eq!(anchor_y_offset(40.0, 0.5), -20.0);
    }

    #[test]
    fn anchor_offsets_at_edges() {
        assert_eq!(anchor_x_offset(100.0, 0.0), 0.0);
        assert_eq!(anchor_x_offset(100.0, 1.0), -100.0);
    }
}
