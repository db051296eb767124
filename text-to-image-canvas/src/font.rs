//! Font face loading.
//!
//! A [`FontFace`] is a font file loaded into a private `fontdb::Database` at a
//! fixed pixel size. The database contains only the faces parsed from that one
//! file — no system font scan — so measurement and rendering are fully
//! determined by the configured font. The same face value must be used for
//! both the measurement pass and the render pass.

use std::path::Path;

use crate::error::{CanvasError, CanvasResult};

/// A loaded, sized font resource used for both measurement and rendering.
#[derive(Clone)]
pub struct FontFace {
    /// Font database holding the faces parsed from the configured file.
    pub(crate) db: fontdb::Database,
    /// Primary family name, read from the font's name table.
    family: String,
    /// Render size in pixels.
    size_px: f32,
}

impl FontFace {
    /// Load a font file from disk at the given pixel size.
    ///
    /// Fails if the size is not positive and finite, if the file cannot be
    /// read, or if it contains no parseable font faces.
    pub fn load<P: AsRef<Path>>(path: P, size_px: f32) -> CanvasResult<Self> {
        if !(size_px.is_finite() && size_px > 0.0) {
            return Err(CanvasError::InvalidFontSize(size_px));
        }

        let path = path.as_ref();
        let mut db = fontdb::Database::new();
        db.load_font_file(path).map_err(|err| CanvasError::FontLoad {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

        // A file that reads fine but parses to zero faces is still unusable.
        let family = db
            .faces()
            .next()
            .and_then(|face| face.families.first().map(|(name, _lang)| name.clone()))
            .ok_or_else(|| CanvasError::FontLoad {
                path: path.display().to_string(),
                reason: "no font faces found in file".to_string(),
            })?;

        log::debug!(target: "canvas", "loaded font family {:?} from {}", family, path.display());

        Ok(Self {
            db,
            family,
            size_px,
        })
    }

    /// Primary family name of the loaded font.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Render size in pixels.
    pub fn size_px(&self) -> f32 {
        self.size_px
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family", &self.family)
            .field("size_px", &self.size_px)
            .field("faces", &self.db.faces().count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_rejects_nonpositive_size() {
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = FontFace::load("does-not-matter.ttf", size);
            assert!(matches!(result, Err(CanvasError::InvalidFontSize(_))));
        }
    }

    #[test]
    fn load_rejects_missing_file() {
        let result = FontFace::load("/nonexistent/font.ttf", 24.0);
        assert!(matches!(result, Err(CanvasError::FontLoad { .. })));
    }

    #[test]
    fn load_rejects_non_font_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-font.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();
        let result = FontFace::load(&path, 24.0);
        assert!(matches!(result, Err(CanvasError::FontLoad { .. })));
    }
}
