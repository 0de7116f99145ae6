// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Effective configuration: defaults, then an optional JSON file, then
// command-line overrides.

use std::path::{Path, PathBuf};

use reportlens_core::BatchConfig;
use reportlens_core::error::Result;
use tracing::info;

/// Values given on the command line. `None` keeps the file/default value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub image_dir: Option<PathBuf>,
    pub report_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub font_path: Option<PathBuf>,
    pub canvas_width: Option<u32>,
    pub font_size: Option<f32>,
    pub line_height: Option<u32>,
}

/// Build and validate the configuration for this run.
pub fn resolve(config_file: Option<&Path>, overrides: Overrides) -> Result<BatchConfig> {
    let mut config = match config_file {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            BatchConfig::load(path)?
        }
        None => BatchConfig::default(),
    };

    if let Some(dir) = overrides.image_dir {
        config.image_dir = dir;
    }
    if let Some(dir) = overrides.report_dir {
        config.report_dir = dir;
    }
    if let Some(dir) = overrides.output_dir {
        config.output_dir = dir;
    }
    if let Some(font) = overrides.font_path {
        config.font_path = Some(font);
    }
    if let Some(width) = overrides.canvas_width {
        config.render.canvas_width = width;
    }
    if let Some(size) = overrides.font_size {
        config.render.font_size = size;
    }
    if let Some(height) = overrides.line_height {
        config.render.line_height = height;
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file_or_flags() {
        let config = resolve(None, Overrides::default()).unwrap();
        assert_eq!(config, BatchConfig::default());
    }

    #[test]
    fn flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reportlens.json");
        std::fs::write(
            &path,
            r#"{ "output_dir": "from-file", "render": { "canvas_width": 600, "font_size": 16.0 } }"#,
        )
        .unwrap();

        let overrides = Overrides {
            output_dir: Some(PathBuf::from("from-flag")),
            font_size: Some(20.0),
            ..Overrides::default()
        };
        let config = resolve(Some(&path), overrides).unwrap();

        assert_eq!(config.output_dir, PathBuf::from("from-flag"));
        assert_eq!(config.render.canvas_width, 600);
        assert_eq!(config.render.font_size, 20.0);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let overrides = Overrides {
            canvas_width: Some(0),
            ..Overrides::default()
        };
        assert!(resolve(None, overrides).is_err());
    }

    #[test]
    fn malformed_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reportlens.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(resolve(Some(&path), Overrides::default()).is_err());
    }
}
