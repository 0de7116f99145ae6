// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Report renderer — report text in, highlighted bitmap out.

use std::path::Path;

use image::RgbImage;
use reportlens_core::error::Result;
use reportlens_core::{HighlightSpan, RenderConfig, SpacingCutover};
use tracing::{debug, info, instrument};

use super::engine::layout_text;
use super::paint::paint;
use crate::font::GlyphFace;
use crate::text::anchors::{locate_cutover, locate_highlight};
use crate::text::report::read_report;

/// Renders reports with one face and one configuration.
///
/// The face is loaded once per run and reused for every report.
///
/// ```ignore
/// let face = load_or_fallback(Some(Path::new("simhei.ttf")), 18.0);
/// let renderer = ReportRenderer::new(face, RenderConfig::default())?;
/// let rendered = renderer.render_file("reports/P001.txt")?;
/// rendered.image.save("P001.png")?;
/// ```
pub struct ReportRenderer {
    face: Box<dyn GlyphFace>,
    config: RenderConfig,
}

/// One rendered report and what was detected in it.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub image: RgbImage,
    /// Highlighted span, if both anchors were found.
    pub span: Option<HighlightSpan>,
    pub cutover: SpacingCutover,
    /// Number of glyphs drawn with a highlight background.
    pub highlighted_glyphs: usize,
}

impl ReportRenderer {
    /// Validate `config` and bind it to `face`.
    pub fn new(face: Box<dyn GlyphFace>, config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { face, config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn face_name(&self) -> &str {
        self.face.name()
    }

    /// Read a report file and render it.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<RenderedReport> {
        let text = read_report(path)?;
        Ok(self.render_text(&text))
    }

    /// Render report text.
    pub fn render_text(&self, text: &str) -> RenderedReport {
        let config = &self.config;
        let span = locate_highlight(
            text,
            &config.highlight_start_anchor,
            &config.highlight_end_anchor,
        );
        let cutover = locate_cutover(text, &config.cutover_anchor);
        if span.is_none() {
            debug!("Highlight anchors not found; rendering without highlight");
        }

        let layout = layout_text(text, span, cutover, self.face.as_ref(), config);
        let text_len = layout.cursor.consumed;
        let image = paint(&layout, text_len, self.face.as_ref(), config);
        let highlighted_glyphs = layout.highlighted().count();

        info!(
            chars = text_len,
            width = image.width(),
            height = image.height(),
            highlighted = highlighted_glyphs,
            "Report rendered"
        );
        RenderedReport {
            image,
            span,
            cutover,
            highlighted_glyphs,
        }
    }
}
