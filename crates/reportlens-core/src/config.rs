// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Run configuration. Loaded from an optional JSON file, then overridden by
// command-line flags, then passed explicitly to the renderer and batch driver.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ReportlensError, Result};

/// Anchor that opens the highlighted findings paragraph.
pub const DEFAULT_HIGHLIGHT_START: &str = "骨断层及融合显像。";
/// Anchor that closes the highlighted paragraph and starts the compact zone.
pub const DEFAULT_HIGHLIGHT_END: &str = "骨断层及CT融合显像：";

/// Layout, colour, and anchor settings for rendering one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Fixed canvas width in pixels.
    pub canvas_width: u32,
    /// Font size in pixels.
    pub font_size: f32,
    /// Vertical advance per line in pixels.
    pub line_height: u32,
    pub left_margin: u32,
    pub top_margin: u32,
    pub right_margin: u32,
    /// Extra rows kept below the last line when cropping.
    pub bottom_margin: u32,
    /// How far the highlight box extends left, right, and above a glyph.
    pub highlight_pad: u32,
    /// How far the highlight box stops short of the next line.
    pub highlight_bottom_inset: u32,
    pub highlight_color: [u8; 3],
    pub text_color: [u8; 3],
    pub background_color: [u8; 3],
    pub highlight_start_anchor: String,
    pub highlight_end_anchor: String,
    pub cutover_anchor: String,
    /// Characters per line assumed when sizing the canvas before layout.
    pub estimated_chars_per_line: u32,
    /// Spare lines added to the canvas estimate.
    pub overprovision_lines: u32,
    /// Tab advance, in space widths.
    pub tab_width: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_width: 730,
            font_size: 18.0,
            line_height: 24,
            left_margin: 10,
            top_margin: 10,
            right_margin: 10,
            bottom_margin: 10,
            highlight_pad: 2,
            highlight_bottom_inset: 4,
            highlight_color: [0xff, 0xf5, 0x9d],
            text_color: [0, 0, 0],
            background_color: [0xff, 0xff, 0xff],
            highlight_start_anchor: DEFAULT_HIGHLIGHT_START.to_owned(),
            highlight_end_anchor: DEFAULT_HIGHLIGHT_END.to_owned(),
            cutover_anchor: DEFAULT_HIGHLIGHT_END.to_owned(),
            estimated_chars_per_line: 38,
            overprovision_lines: 50,
            tab_width: 4,
        }
    }
}

impl RenderConfig {
    /// Reject settings that would make layout meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 {
            return Err(invalid("canvas_width must be positive"));
        }
        if self.line_height == 0 {
            return Err(invalid("line_height must be positive"));
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(invalid("font_size must be a positive number"));
        }
        if self.left_margin + self.right_margin >= self.canvas_width {
            return Err(invalid(format!(
                "margins ({} + {}) leave no room on a {}px canvas",
                self.left_margin, self.right_margin, self.canvas_width
            )));
        }
        if self.estimated_chars_per_line == 0 {
            return Err(invalid("estimated_chars_per_line must be positive"));
        }
        for (name, anchor) in [
            ("highlight_start_anchor", &self.highlight_start_anchor),
            ("highlight_end_anchor", &self.highlight_end_anchor),
            ("cutover_anchor", &self.cutover_anchor),
        ] {
            if anchor.is_empty() {
                return Err(invalid(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// Right-hand limit a glyph may not cross.
    pub fn wrap_limit(&self) -> i32 {
        (self.canvas_width - self.right_margin) as i32
    }
}

/// Directory layout and naming conventions for a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Directory holding `<case>_front.<ext>` / `<case>_back.<ext>` images.
    pub image_dir: PathBuf,
    /// Directory holding `<case>.<report_extension>` reports.
    pub report_dir: PathBuf,
    /// Where merged images are written. Created if missing.
    pub output_dir: PathBuf,
    /// TrueType/OpenType font; the built-in face is used when it cannot be loaded.
    pub font_path: Option<PathBuf>,
    pub front_suffix: String,
    pub back_suffix: String,
    pub image_extension: String,
    pub report_extension: String,
    /// Appended to the case id to form the output file stem.
    pub output_suffix: String,
    pub render: RenderConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("cropped"),
            report_dir: PathBuf::from("reports"),
            output_dir: PathBuf::from("highlight"),
            font_path: Some(PathBuf::from("simhei.ttf")),
            front_suffix: "front".to_owned(),
            back_suffix: "back".to_owned(),
            image_extension: "png".to_owned(),
            report_extension: "txt".to_owned(),
            output_suffix: "_merged".to_owned(),
            render: RenderConfig::default(),
        }
    }
}

impl BatchConfig {
    /// Load a config from a JSON file. Fields absent from the file keep their
    /// defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        Ok(config)
    }

    /// Pretty-printed JSON, suitable for `load`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.front_suffix.is_empty() || self.back_suffix.is_empty() {
            return Err(invalid("front_suffix and back_suffix must not be empty"));
        }
        if self.front_suffix == self.back_suffix {
            return Err(invalid("front_suffix and back_suffix must differ"));
        }
        self.render.validate()
    }
}

fn invalid(msg: impl Into<String>) -> ReportlensError {
    ReportlensError::InvalidConfig(msg.into())
}
