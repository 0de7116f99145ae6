// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch driver — renders each case's report and merges it with the case's
// front and back scans.
//
// A failure inside one case never stops the run: the case is logged, recorded
// as skipped, and the driver moves on. Only errors that would hit every case
// the same way (an unusable output directory, an unreadable image directory)
// end the run early.

use std::path::PathBuf;

use image::Rgb;
use reportlens_core::error::{ReportlensError, Result};
use reportlens_core::{BatchConfig, CaseId, Disposition};
use reportlens_render::{ReportRenderer, compose_row, open_rgb, pad_to_height, save_png};
use tracing::{info, instrument, warn};

use super::discovery::{CaseImages, discover_cases};

/// A case that produced no output, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCase {
    pub case: CaseId,
    pub reason: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedCase>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}

/// Runs the merge pipeline over every case in the image directory.
pub struct BatchRunner<'a> {
    config: &'a BatchConfig,
    renderer: &'a ReportRenderer,
}

impl<'a> BatchRunner<'a> {
    pub fn new(config: &'a BatchConfig, renderer: &'a ReportRenderer) -> Self {
        Self { config, renderer }
    }

    /// Process all cases. Returns `Err` only when the run had to stop.
    #[instrument(skip_all, fields(images = %self.config.image_dir.display()))]
    pub fn run(&self) -> Result<BatchSummary> {
        std::fs::create_dir_all(&self.config.output_dir)?;
        let cases = discover_cases(&self.config.image_dir, self.config)?;
        let mut summary = BatchSummary::default();

        for (case, images) in &cases {
            match self.process_case(case, images) {
                Ok(path) => {
                    info!(%case, output = %path.display(), "Case merged");
                    summary.written.push(path);
                }
                Err(err) if err.disposition() == Disposition::Skip => {
                    warn!(%case, error = %err, "Case skipped");
                    summary.skipped.push(SkippedCase {
                        case: case.clone(),
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            written = summary.written.len(),
            skipped = summary.skipped.len(),
            "Batch finished"
        );
        Ok(summary)
    }

    /// Output path for `case`.
    pub fn output_path(&self, case: &CaseId) -> PathBuf {
        self.config
            .output_dir
            .join(format!("{}{}.png", case, self.config.output_suffix))
    }

    /// Report path for `case`.
    pub fn report_path(&self, case: &CaseId) -> PathBuf {
        self.config
            .report_dir
            .join(format!("{}.{}", case, self.config.report_extension))
    }

    fn process_case(&self, case: &CaseId, images: &CaseImages) -> Result<PathBuf> {
        let (Some(front), Some(back)) = (&images.front, &images.back) else {
            return Err(ReportlensError::missing(
                case.as_str(),
                format!(
                    "{}/{} image",
                    self.config.front_suffix, self.config.back_suffix
                ),
            ));
        };

        let report = self.report_path(case);
        if !report.is_file() {
            return Err(ReportlensError::missing(
                case.as_str(),
                format!("report {}", report.display()),
            ));
        }

        let rendered = self.renderer.render_file(&report)?;
        let front = open_rgb(front)?;
        let back = open_rgb(back)?;

        let background = Rgb(self.renderer.config().background_color);
        let height = rendered.image.height().max(front.height()).max(back.height());
        let panels = [rendered.image, front, back].map(|panel| pad_to_height(panel, height, background));
        let merged = compose_row(&panels, background);

        let out = self.output_path(case);
        save_png(&merged, &out)?;
        Ok(out)
    }
}
