// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Glyph faces — measure and draw single characters.
//
// A face is loaded once per run and shared read-only by every report. When
// the configured font cannot be loaded, the built-in face takes over for the
// whole run so rendering never fails outright.

mod builtin;
mod truetype;

use std::path::Path;

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use tracing::{info, warn};

pub use builtin::BuiltinFace;
pub use truetype::TrueTypeFace;

/// A source of glyph measurements and glyph drawing.
pub trait GlyphFace {
    /// Human-readable face name for logs.
    fn name(&self) -> &str;

    /// Horizontal advance of `ch` in whole pixels.
    ///
    /// Must return a usable width even for characters the face cannot draw,
    /// so the layout cursor never stalls.
    fn advance(&self, ch: char) -> u32;

    /// Draw `ch` with its top-left corner at (`x`, `y`).
    fn draw(&self, canvas: &mut RgbImage, ch: char, x: i32, y: i32, color: Rgb<u8>);
}

/// Load the TrueType face at `path`, or fall back to the built-in face.
///
/// Logs a single warning on failure; callers load once per run.
pub fn load_or_fallback(path: Option<&Path>, font_size: f32) -> Box<dyn GlyphFace> {
    let Some(path) = path else {
        info!("No font configured, using built-in face");
        return Box::new(BuiltinFace::new(font_size));
    };
    match TrueTypeFace::open(path, font_size) {
        Ok(face) => {
            info!(font = face.name(), "Font loaded");
            Box::new(face)
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "Font unavailable, falling back to built-in face; glyph coverage is degraded"
            );
            Box::new(BuiltinFace::new(font_size))
        }
    }
}

/// Draw a hollow box standing in for a glyph the face cannot render.
pub(crate) fn draw_placeholder(
    canvas: &mut RgbImage,
    x: i32,
    y: i32,
    advance: u32,
    height: u32,
    color: Rgb<u8>,
) {
    // One pixel of air either side so neighbouring boxes stay distinct.
    if advance < 3 || height < 3 {
        return;
    }
    let rect = Rect::at(x + 1, y + 1).of_size(advance - 2, height - 2);
    draw_hollow_rect_mut(canvas, rect, color);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let face = load_or_fallback(Some(dir.path().join("absent.ttf").as_path()), 18.0);
        assert_eq!(face.name(), BuiltinFace::NAME);
        assert!(face.advance('A') > 0);
    }

    #[test]
    fn garbage_font_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        let face = load_or_fallback(Some(path.as_path()), 18.0);
        assert_eq!(face.name(), BuiltinFace::NAME);
    }

    #[test]
    fn no_font_uses_builtin() {
        assert_eq!(load_or_fallback(None, 18.0).name(), BuiltinFace::NAME);
    }

    #[test]
    fn placeholder_stays_inside_advance() {
        let mut canvas = RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]));
        draw_placeholder(&mut canvas, 0, 0, 10, 12, Rgb([0, 0, 0]));

        assert_eq!(canvas.get_pixel(1, 1), &Rgb([0, 0, 0]));
        assert_eq!(canvas.get_pixel(8, 10), &Rgb([0, 0, 0]));
        assert_eq!(canvas.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(canvas.get_pixel(9, 5), &Rgb([255, 255, 255]));
        // Interior is left empty.
        assert_eq!(canvas.get_pixel(4, 5), &Rgb([255, 255, 255]));
    }
}
