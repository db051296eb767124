//! Canvas: a request-owned RGBA pixel buffer with text rendering.

use cosmic_text::{Command, FontSystem, SwashCache};
use tiny_skia::{FillRule, Mask, Paint, Pixmap, Transform};

use crate::error::{CanvasError, CanvasResult};
use crate::font::FontFace;
use crate::text::{anchor_x_offset, anchor_y_offset, Extent};

/// Maximum canvas dimension (same as Chrome).
const MAX_DIMENSION: u32 = 32767;

/// An in-memory RGBA raster with an attached font face.
///
/// The pixel buffer starts fully transparent. Text is rendered by converting
/// glyph outlines to vector paths and filling them in opaque black. The
/// canvas owns its own `FontSystem` built from the face's font database, so
/// nothing is shared between requests.
pub struct Canvas {
    /// Width of the canvas in pixels.
    width: u32,
    /// Height of the canvas in pixels.
    height: u32,
    /// Pixel buffer (premultiplied alpha).
    pixmap: Pixmap,
    /// Font system for shaping and measurement.
    font_system: FontSystem,
    /// Swash cache for glyph outline retrieval.
    swash_cache: SwashCache,
    /// Font face used for both measurement and rendering.
    face: FontFace,
    /// Clip mask restricting drawing to the canvas bounds (if enabled).
    clip_mask: Option<Mask>,
}

impl Canvas {
    /// Create a new transparent canvas with the specified dimensions.
    pub fn new(width: u32, height: u32, face: &FontFace) -> CanvasResult<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(CanvasError::InvalidDimensions { width, height });
        }

        // Pixmap::new zero-fills, so every pixel starts fully transparent.
        let pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;

        let font_system = FontSystem::new_with_locale_and_db("en".to_string(), face.db.clone());

        Ok(Self {
            width,
            height,
            pixmap,
            font_system,
            swash_cache: SwashCache::new(),
            face: face.clone(),
            clip_mask: None,
        })
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Restrict all subsequent drawing to the canvas bounds.
    ///
    /// Defensive: the canvas is normally already sized to fit the text.
    pub fn clip_to_bounds(&mut self) {
        let mut mask = match Mask::new(self.width, self.height) {
            Some(mask) => mask,
            None => return,
        };
        let rect = match tiny_skia::Rect::from_xywh(0.0, 0.0, self.width as f32, self.height as f32)
        {
            Some(rect) => rect,
            None => return,
        };
        let path = tiny_skia::PathBuilder::from_rect(rect);
        mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
        self.clip_mask = Some(mask);
    }

    /// Measure the extent of `text` with the canvas's font face.
    ///
    /// Never touches the pixel buffer, so a throwaway canvas can be used for
    /// the measurement pass.
    pub fn measure_text(&mut self, text: &str) -> Extent {
        crate::text::measure_text(&mut self.font_system, text, &self.face)
    }

    /// Draw `text` so the (ax, ay) fraction of its bounding box sits at (x, y).
    ///
    /// `ax = ay = 0.5` centers the text box on the point. Glyphs are rendered
    /// as vector outlines filled in opaque black.
    pub fn draw_text_anchored(&mut self, text: &str, x: f32, y: f32, ax: f32, ay: f32) {
        log::debug!(target: "canvas", "drawTextAnchored {:?} at ({}, {}) anchor ({}, {})", text, x, y, ax, ay);

        let buffer = crate::text::shape_text(&mut self.font_system, text, &self.face);

        let mut text_width: f32 = 0.0;
        let mut text_height: f32 = 0.0;
        for run in buffer.layout_runs() {
            text_width = text_width.max(run.line_w);
            text_height = text_height.max(run.line_top + run.line_height);
        }

        let left = x + anchor_x_offset(text_width, ax);
        let top = y + anchor_y_offset(text_height, ay);

        let mut paint = Paint::default();
        paint.set_color(tiny_skia::Color::BLACK);
        paint.anti_alias = true;

        for run in buffer.layout_runs() {
            // run.line_y is the baseline position relative to the buffer top.
            let baseline_y = top + run.line_y;
            for glyph in run.glyphs.iter() {
                let physical_glyph = glyph.physical((0.0, 0.0), 1.0);

                // Floating-point glyph position for sub-pixel precision.
                let glyph_x = left + glyph.x + glyph.font_size * glyph.x_offset;
                let glyph_y = baseline_y + glyph.y - glyph.font_size * glyph.y_offset;

                let Some(commands) = self
                    .swash_cache
                    .get_outline_commands(&mut self.font_system, physical_glyph.cache_key)
                else {
                    continue;
                };

                // Font outlines have Y pointing up, the canvas has Y pointing
                // down, so Y coordinates are negated during path building.
                let mut path_builder = tiny_skia::PathBuilder::new();
                for cmd in commands {
                    match cmd {
                        Command::MoveTo(p) => path_builder.move_to(p.x, -p.y),
                        Command::LineTo(p) => path_builder.line_to(p.x, -p.y),
                        Command::QuadTo(ctrl, end) => {
                            path_builder.quad_to(ctrl.x, -ctrl.y, end.x, -end.y)
                        }
                        Command::CurveTo(c1, c2, end) => {
                            path_builder.cubic_to(c1.x, -c1.y, c2.x, -c2.y, end.x, -end.y)
                        }
                        Command::Close => path_builder.close(),
                    }
                }

                if let Some(path) = path_builder.finish() {
                    let glyph_transform = Transform::from_translate(glyph_x, glyph_y);
                    self.pixmap.fill_path(
                        &path,
                        &paint,
                        FillRule::Winding,
                        glyph_transform,
                        self.clip_mask.as_ref(),
                    );
                }
            }
        }
    }

    /// Canvas pixels as straight-alpha RGBA bytes (row-major).
    pub fn image_data(&self) -> Vec<u8> {
        let src = self.pixmap.data();
        let mut data = vec![0u8; src.len()];

        for (dst, pixel) in data.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
            // Convert from premultiplied alpha to straight alpha.
            let a = pixel[3];
            if a == 0 {
                dst.copy_from_slice(&[0, 0, 0, 0]);
            } else if a == 255 {
                dst.copy_from_slice(pixel);
            } else {
                let alpha_f = a as f32 / 255.0;
                dst[0] = (pixel[0] as f32 / alpha_f).min(255.0) as u8;
                dst[1] = (pixel[1] as f32 / alpha_f).min(255.0) as u8;
                dst[2] = (pixel[2] as f32 / alpha_f).min(255.0) as u8;
                dst[3] = a;
            }
        }

        data
    }

    /// Export the canvas as PNG data (RGBA, 8-bit, alpha preserved).
    pub fn to_png(&self) -> CanvasResult<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.image_data())?;
        }
        Ok(buf)
    }
}
