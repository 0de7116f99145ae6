// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Built-in fallback face. Draws with the DejaVu Sans Mono font compiled into
// the binary, which covers Latin, Greek, and Cyrillic. Characters outside it
// (CJK in particular) keep a faithful width and get a placeholder box.

use image::{Rgb, RgbImage};
use tracing::warn;
use unicode_width::UnicodeWidthChar;

use super::truetype::TrueTypeFace;
use super::{GlyphFace, draw_placeholder};

/// DejaVu Sans Mono (Bitstream Vera license, see `assets/DejaVu-LICENSE.txt`).
pub(crate) const EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/DejaVuSansMono.ttf");

/// Fixed-cell face used when no font file can be loaded.
pub struct BuiltinFace {
    /// Embedded glyphs; `None` only if the embedded font fails to parse.
    glyphs: Option<TrueTypeFace>,
    /// Advance of a narrow (single-width) character.
    cell: u32,
    /// Height of the placeholder box.
    glyph_height: u32,
}

impl BuiltinFace {
    pub const NAME: &'static str = "built-in";

    pub fn new(font_size: f32) -> Self {
        let size = font_size.max(2.0);
        let glyphs = match TrueTypeFace::from_bytes(Self::NAME, EMBEDDED_FONT.to_vec(), size) {
            Ok(face) => Some(face),
            Err(err) => {
                warn!(error = %err, "Embedded font unreadable, built-in face draws placeholders only");
                None
            }
        };
        let cell = glyphs
            .as_ref()
            .map(|face| face.advance('0'))
            .filter(|&advance| advance > 0)
            .unwrap_or((size / 2.0).ceil() as u32);
        Self {
            glyphs,
            cell,
            glyph_height: size.ceil() as u32,
        }
    }

    /// Whether `ch` is drawn as a real glyph rather than a placeholder.
    pub fn covers(&self, ch: char) -> bool {
        self.covering(ch).is_some()
    }

    fn covering(&self, ch: char) -> Option<&TrueTypeFace> {
        self.glyphs.as_ref().filter(|face| face.covers(ch))
    }
}

impl GlyphFace for BuiltinFace {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn advance(&self, ch: char) -> u32 {
        if let Some(face) = self.covering(ch) {
            return face.advance(ch);
        }
        // Control characters get a visible cell so they are not lost.
        if ch.is_control() {
            return self.cell;
        }
        match ch.width() {
            Some(2) => self.cell * 2,
            Some(0) => 0,
            _ => self.cell,
        }
    }

    fn draw(&self, canvas: &mut RgbImage, ch: char, x: i32, y: i32, color: Rgb<u8>) {
        match self.covering(ch) {
            Some(face) => face.draw(canvas, ch, x, y, color),
            None => draw_placeholder(canvas, x, y, self.advance(ch), self.glyph_height, color),
        }
    }
}
