// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout engine — a single forward pass over the report's characters.
//
// The pass places every visible character on a fixed-width page with
// character-granular wrapping, decides which characters get a highlight
// background, and collapses runs of blank lines once the text is past the
// spacing cutover. Nothing is drawn here; `paint` consumes the result.

use reportlens_core::{HighlightSpan, RenderConfig, SpacingCutover, is_layout_whitespace};

use crate::font::GlyphFace;

/// Mutable layout state threaded through the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
    /// Characters consumed so far, newlines and collapsed newlines included.
    pub consumed: usize,
    /// Set by a newline, cleared by the next non-whitespace character.
    pub after_newline: bool,
}

impl Cursor {
    fn start(config: &RenderConfig) -> Self {
        Self {
            x: config.left_margin as i32,
            y: config.top_margin as i32,
            consumed: 0,
            after_newline: true,
        }
    }

    fn line_break(&mut self, config: &RenderConfig) {
        self.y += config.line_height as i32;
        self.x = config.left_margin as i32;
    }
}

/// Background rectangle drawn behind a highlighted glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// A visible character at its final position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedGlyph {
    /// Char offset into the report text.
    pub offset: usize,
    pub ch: char,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub highlight: Option<HighlightBox>,
}

/// Result of laying out one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Visible (non-whitespace) characters in text order.
    pub glyphs: Vec<PlacedGlyph>,
    /// Cursor after the last character.
    pub cursor: Cursor,
}

impl Layout {
    /// Canvas height that holds every line plus the bottom margin.
    pub fn used_height(&self, config: &RenderConfig) -> u32 {
        let bottom = self.cursor.y + (config.line_height + config.bottom_margin) as i32;
        bottom.max(1) as u32
    }

    /// Glyphs carrying a highlight background.
    pub fn highlighted(&self) -> impl Iterator<Item = &PlacedGlyph> {
        self.glyphs.iter().filter(|g| g.highlight.is_some())
    }
}

/// Lay out `text` on a canvas of `config.canvas_width`.
pub fn layout_text(
    text: &str,
    span: Option<HighlightSpan>,
    cutover: SpacingCutover,
    face: &dyn GlyphFace,
    config: &RenderConfig,
) -> Layout {
    let mut cursor = Cursor::start(config);
    let mut glyphs = Vec::new();
    let left = config.left_margin as i32;
    let limit = config.wrap_limit();

    for ch in text.chars() {
        let offset = cursor.consumed;
        cursor.consumed += 1;

        if ch == '\n' {
            if cutover.in_compact_zone(offset) && cursor.after_newline {
                continue;
            }
            cursor.line_break(config);
            cursor.after_newline = true;
            continue;
        }

        let width = advance_of(ch, face, config);
        // Wrap before the glyph would cross the right margin. A glyph wider
        // than the whole line is placed at the left margin as-is.
        if cursor.x + width as i32 > limit && cursor.x > left {
            cursor.line_break(config);
        }

        let whitespace = is_layout_whitespace(ch);
        if !whitespace {
            cursor.after_newline = false;
            let highlighted = span.is_some_and(|s| s.contains(offset));
            glyphs.push(PlacedGlyph {
                offset,
                ch,
                x: cursor.x,
                y: cursor.y,
                width,
                highlight: highlighted.then(|| highlight_box(cursor.x, cursor.y, width, config)),
            });
        }

        cursor.x += width as i32;
    }

    Layout { glyphs, cursor }
}

fn advance_of(ch: char, face: &dyn GlyphFace, config: &RenderConfig) -> u32 {
    match ch {
        '\r' => 0,
        '\t' => face.advance(' ') * config.tab_width,
        _ => face.advance(ch),
    }
}

fn highlight_box(x: i32, y: i32, width: u32, config: &RenderConfig) -> HighlightBox {
    let pad = config.highlight_pad as i32;
    let top = y - pad;
    let bottom = y + config.line_height as i32 - config.highlight_bottom_inset as i32;
    HighlightBox {
        x: x - pad,
        y: top,
        // Inclusive on both edges, like the rectangle corners it is built from.
        width: width + 2 * config.highlight_pad + 1,
        height: (bottom - top + 1).max(1) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::testing::CellFace;
    use crate::text::anchors::{locate_cutover, locate_highlight};

    fn config() -> RenderConfig {
        RenderConfig::default()
    }

    fn run(text: &str, span: Option<HighlightSpan>, cutover: SpacingCutover) -> Layout {
        let config = config();
        let face = CellFace;
        layout_text(text, span, cutover, &face, &config)
    }

    fn plain(text: &str) -> Layout {
        run(text, None, SpacingCutover::disabled(text.chars().count()))
    }

    fn glyph(layout: &Layout, ch: char) -> PlacedGlyph {
        *layout.glyphs.iter().find(|g| g.ch == ch).expect("glyph placed")
    }

    #[test]
    fn counter_advances_once_per_character() {
        let text = "A\n\n\nB\tC\r\nD 骨";
        let layout = run(text, None, SpacingCutover::at(0));
        assert_eq!(layout.cursor.consumed, text.chars().count());
    }

    #[test]
    fn offsets_follow_text_order() {
        let layout = plain("ab\ncd");
        let offsets: Vec<usize> = layout.glyphs.iter().map(|g| g.offset).collect();
        assert_eq!(offsets, vec![0, 1, 3, 4]);
    }

    #[test]
    fn newline_moves_to_next_line() {
        let layout = plain("A\nB");
        let (a, b) = (glyph(&layout, 'A'), glyph(&layout, 'B'));
        assert_eq!(a.y, 10);
        assert_eq!(b.y, 34);
        assert_eq!(b.x, 10);
    }

    #[test]
    fn blank_lines_kept_before_cutover() {
        let layout = plain("A\n\n\nB");
        assert_eq!(glyph(&layout, 'B').y - glyph(&layout, 'A').y, 3 * 24);
    }

    #[test]
    fn blank_lines_collapse_in_compact_zone() {
        let layout = run("A\n\n\nB", None, SpacingCutover::at(1));
        assert_eq!(glyph(&layout, 'B').y - glyph(&layout, 'A').y, 24);
        assert_eq!(layout.cursor.consumed, 5);
    }

    #[test]
    fn leading_newlines_collapse_entirely_in_compact_zone() {
        // The cursor starts at line start, so the first newline already counts
        // as a repeat.
        let layout = run("\n\nA", None, SpacingCutover::at(0));
        assert_eq!(glyph(&layout, 'A').y, 10);
    }

    #[test]
    fn whitespace_only_line_still_collapses() {
        let layout = run("A\n  \t\nB", None, SpacingCutover::at(0));
        assert_eq!(glyph(&layout, 'B').y - glyph(&layout, 'A').y, 24);
    }

    #[test]
    fn wraps_before_overflowing_glyph() {
        // Narrow cells are 9px. Usable width is
        // 730 - 10 - 10 = 710px, so 78 cells fit on a line.
        let text = "x".repeat(100);
        let layout = plain(&text);
        let config = config();

        for g in &layout.glyphs {
            assert!(g.x + g.width as i32 <= config.wrap_limit(), "glyph {} overflows", g.offset);
        }
        assert_eq!(layout.glyphs[77].y, 10);
        assert_eq!(layout.glyphs[78].y, 34);
        assert_eq!(layout.glyphs[78].x, 10);
    }

    #[test]
    fn wide_characters_wrap_earlier() {
        let text = "骨".repeat(50);
        let layout = plain(&text);
        // 18px per glyph: 39 fit in 710px.
        assert_eq!(layout.glyphs[38].y, 10);
        assert_eq!(layout.glyphs[39].y, 34);
    }

    #[test]
    fn highlight_skips_whitespace() {
        let text = "<<X Y>>";
        let span = locate_highlight(text, "<<", ">>");
        let layout = run(text, span, SpacingCutover::disabled(7));

        let marked: Vec<char> = layout.highlighted().map(|g| g.ch).collect();
        assert_eq!(marked, vec!['X', 'Y']);
    }

    #[test]
    fn highlight_box_pads_glyph() {
        let text = "<<X>>";
        let span = locate_highlight(text, "<<", ">>");
        let layout = run(text, span, SpacingCutover::disabled(5));

        let x = glyph(&layout, 'X');
        let hl = x.highlight.unwrap();
        assert_eq!(hl.x, x.x - 2);
        assert_eq!(hl.y, x.y - 2);
        assert_eq!(hl.width, x.width + 5);
        // From y - 2 down to y + 24 - 4, inclusive.
        assert_eq!(hl.height, 23);
    }

    #[test]
    fn no_span_means_no_highlight() {
        let layout = plain("骨断层及融合显像。ABC");
        assert_eq!(layout.highlighted().count(), 0);
    }

    #[test]
    fn report_scenario_highlights_only_findings() {
        let config = config();
        let text = "骨断层及融合显像。ABC骨断层及CT融合显像：DEF";
        let span = locate_highlight(text, &config.highlight_start_anchor, &config.highlight_end_anchor);
        let cutover = locate_cutover(text, &config.cutover_anchor);
        let layout = run(text, span, cutover);

        let marked: String = layout.highlighted().map(|g| g.ch).collect();
        assert_eq!(marked, "ABC");
        for ch in ['D', 'E', 'F'] {
            assert!(glyph(&layout, ch).highlight.is_none());
        }
    }

    #[test]
    fn carriage_return_takes_no_space() {
        let layout = plain("A\rB");
        assert_eq!(glyph(&layout, 'B').x, glyph(&layout, 'A').x + 9);
    }

    #[test]
    fn tab_advances_by_spaces() {
        let layout = plain("A\tB");
        assert_eq!(glyph(&layout, 'B').x, glyph(&layout, 'A').x + 9 + 4 * 9);
    }

    #[test]
    fn used_height_covers_last_line() {
        let layout = plain("A\nB");
        // Last line at y = 34, plus one line and the bottom margin.
        assert_eq!(layout.used_height(&config()), 34 + 24 + 10);
    }
}
