// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Painting — draws a finished layout onto an RGB canvas.
//
// The canvas is allocated once at an over-provisioned height estimated from
// the character count, written in a single pass, then cropped to the rows the
// layout actually used.

use image::{Rgb, RgbImage, imageops};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use reportlens_core::RenderConfig;
use tracing::debug;

use super::engine::Layout;
use crate::font::GlyphFace;

/// Paint `layout` for a text of `text_len` chars and crop to the used height.
pub fn paint(
    layout: &Layout,
    text_len: usize,
    face: &dyn GlyphFace,
    config: &RenderConfig,
) -> RgbImage {
    let used = layout.used_height(config);
    let estimated = estimated_height(text_len, config);
    // The estimate assumes a typical line length; very short lines can beat it.
    let capacity = estimated.max(used);
    debug!(estimated, used, capacity, "Allocating report canvas");

    let mut canvas = RgbImage::from_pixel(
        config.canvas_width,
        capacity,
        Rgb(config.background_color),
    );
    let highlight = Rgb(config.highlight_color);
    let ink = Rgb(config.text_color);

    for glyph in &layout.glyphs {
        if let Some(hl) = glyph.highlight {
            let rect = Rect::at(hl.x, hl.y).of_size(hl.width.max(1), hl.height.max(1));
            draw_filled_rect_mut(&mut canvas, rect, highlight);
        }
        face.draw(&mut canvas, glyph.ch, glyph.x, glyph.y, ink);
    }

    imageops::crop_imm(&canvas, 0, 0, config.canvas_width, used).to_image()
}

/// Over-provisioned canvas height for a text of `text_len` chars.
pub fn estimated_height(text_len: usize, config: &RenderConfig) -> u32 {
    let per_line = config.estimated_chars_per_line.max(1) as usize;
    let lines = text_len / per_line + config.overprovision_lines as usize;
    u32::try_from(lines)
        .unwrap_or(u32::MAX)
        .saturating_mul(config.line_height)
}
