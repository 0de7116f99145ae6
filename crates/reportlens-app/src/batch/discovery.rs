// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Case discovery. Scan images are named `<case>_<role>.<ext>` where role is
// the front or back suffix; images sharing a case id are grouped together.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use reportlens_core::error::Result;
use reportlens_core::{BatchConfig, CaseId};
use tracing::{debug, info};

/// Scan images found for one case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseImages {
    pub front: Option<PathBuf>,
    pub back: Option<PathBuf>,
}

/// Group the images in `image_dir` by case id, sorted by id.
///
/// Files whose role is neither front nor back still create a case entry so
/// the batch reports them as incomplete instead of ignoring them silently.
pub fn discover_cases(
    image_dir: &Path,
    config: &BatchConfig,
) -> Result<BTreeMap<CaseId, CaseImages>> {
    let front_tag = format!("_{}", config.front_suffix);
    let back_tag = format!("_{}", config.back_suffix);
    let mut cases: BTreeMap<CaseId, CaseImages> = BTreeMap::new();

    for entry in std::fs::read_dir(image_dir)? {
        let path = entry?.path();
        if !path.is_file() || !has_extension(&path, &config.image_extension) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            debug!(path = %path.display(), "Skipping non-UTF-8 file name");
            continue;
        };

        let id = stem.replace(&front_tag, "").replace(&back_tag, "");
        let role = stem.rsplit('_').next().unwrap_or(stem);
        let images = cases.entry(CaseId::new(id)).or_default();
        if role == config.front_suffix {
            images.front = Some(path);
        } else if role == config.back_suffix {
            images.back = Some(path);
        }
    }

    info!(cases = cases.len(), dir = %image_dir.display(), "Cases discovered");
    Ok(cases)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}
