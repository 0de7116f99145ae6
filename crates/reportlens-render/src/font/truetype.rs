// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// TrueType/OpenType face backed by `ab_glyph`, drawn with `imageproc`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use reportlens_core::error::{ReportlensError, Result};
use tracing::{debug, instrument};

use super::{GlyphFace, draw_placeholder};

/// A scalable font at a fixed pixel size.
///
/// Advances are cached per character; a report repeats a few hundred
/// distinct characters thousands of times.
pub struct TrueTypeFace {
    name: String,
    font: FontVec,
    scale: PxScale,
    advances: RefCell<HashMap<char, u32>>,
}

impl TrueTypeFace {
    /// Load a font file.
    #[instrument(skip_all, fields(path = %path.as_ref().display(), font_size = font_size))]
    pub fn open(path: impl AsRef<Path>, font_size: f32) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|err| {
            ReportlensError::FontLoad(format!("failed to read {}: {}", path.display(), err))
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_bytes(name, data, font_size)
    }

    /// Build a face from raw font bytes.
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>, font_size: f32) -> Result<Self> {
        let name = name.into();
        let font = FontVec::try_from_vec(data)
            .map_err(|err| ReportlensError::FontLoad(format!("{}: {}", name, err)))?;
        debug!(font = %name, glyphs = font.glyph_count(), "Font parsed");
        Ok(Self {
            name,
            font,
            scale: PxScale::from(font_size),
            advances: RefCell::new(HashMap::new()),
        })
    }

    /// Whether the font has a real glyph (not `.notdef`) for `ch`.
    ///
    /// Control characters never count as covered: fonts that map them do so
    /// to blank glyphs, which would make them vanish from the page.
    pub fn covers(&self, ch: char) -> bool {
        !ch.is_control() && self.font.glyph_id(ch) != GlyphId(0)
    }

    fn measure(&self, ch: char) -> u32 {
        let scaled = self.font.as_scaled(self.scale);
        let id = if self.covers(ch) {
            scaled.glyph_id(ch)
        } else {
            GlyphId(0)
        };
        let mut advance = scaled.h_advance(id);
        if id == GlyphId(0) && advance <= 0.0 {
            // Uncovered character and a zero-width .notdef: use half an em.
            advance = self.scale.x / 2.0;
        }
        advance.max(0.0).ceil() as u32
    }
}

impl GlyphFace for TrueTypeFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn advance(&self, ch: char) -> u32 {
        if let Some(&cached) = self.advances.borrow().get(&ch) {
            return cached;
        }
        let advance = self.measure(ch);
        self.advances.borrow_mut().insert(ch, advance);
        advance
    }

    fn draw(&self, canvas: &mut RgbImage, ch: char, x: i32, y: i32, color: Rgb<u8>) {
        if !self.covers(ch) {
            let height = self.scale.y.ceil() as u32;
            draw_placeholder(canvas, x, y, self.advance(ch), height, color);
            return;
        }
        let mut buf = [0u8; 4];
        draw_text_mut(canvas, color, x, y, self.scale, &self.font, ch.encode_utf8(&mut buf));
    }
}
