// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Composition — pad panels to a common height and lay them side by side,
// plus the image I/O the batch needs around it.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage, imageops};
use reportlens_core::error::{ReportlensError, Result};
use tracing::{debug, instrument};

/// Decode an image file and convert it to 8-bit RGB.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn open_rgb(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|err| {
        ReportlensError::UnreadableImage(format!("failed to open {}: {}", path.display(), err))
    })?;
    debug!(width = image.width(), height = image.height(), "Image loaded");
    Ok(image.to_rgb8())
}

/// Extend `image` downwards to `height` rows, filling with `background`.
///
/// Images already at least `height` tall are returned unchanged.
pub fn pad_to_height(image: RgbImage, height: u32, background: Rgb<u8>) -> RgbImage {
    if image.height() >= height {
        return image;
    }
    let mut padded = RgbImage::from_pixel(image.width(), height, background);
    imageops::replace(&mut padded, &image, 0, 0);
    padded
}

/// Concatenate panels left to right, top-aligned, on a `background` canvas as
/// tall as the tallest panel.
pub fn compose_row(panels: &[RgbImage], background: Rgb<u8>) -> RgbImage {
    let height = panels.iter().map(RgbImage::height).max().unwrap_or(0);
    let width = panels.iter().map(RgbImage::width).sum();
    let mut merged = RgbImage::from_pixel(width, height, background);

    let mut x = 0i64;
    for panel in panels {
        imageops::replace(&mut merged, panel, x, 0);
        x += i64::from(panel.width());
    }
    debug!(panels = panels.len(), width, height, "Panels composed");
    merged
}

/// Write `image` as PNG, regardless of the path's extension.
pub fn save_png(image: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|err| {
            ReportlensError::ImageEncode(format!(
                "failed to save image to {}: {}",
                path.display(),
                err
            ))
        })
}
