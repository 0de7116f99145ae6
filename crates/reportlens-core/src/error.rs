// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for reportlens.

use thiserror::Error;

/// Top-level error type for all reportlens operations.
#[derive(Debug, Error)]
pub enum ReportlensError {
    // -- Case inputs --
    #[error("case {case}: missing {what}")]
    MissingInput { case: String, what: String },

    #[error("image could not be decoded: {0}")]
    UnreadableImage(String),

    // -- Rendering --
    #[error("font could not be loaded: {0}")]
    FontLoad(String),

    #[error("image encoding failed: {0}")]
    ImageEncode(String),

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// What a batch run should do after an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Abandon the current case and carry on with the next one.
    Skip,
    /// The run cannot make progress; stop the batch.
    Abort,
}

impl ReportlensError {
    /// Classify the error for the batch driver.
    ///
    /// Anything tied to a single case's inputs or output is skippable. Bad
    /// configuration would fail every case the same way, so it aborts.
    pub fn disposition(&self) -> Disposition {
        match self {
            ReportlensError::MissingInput { .. }
            | ReportlensError::UnreadableImage(_)
            | ReportlensError::FontLoad(_)
            | ReportlensError::ImageEncode(_)
            | ReportlensError::Io(_) => Disposition::Skip,
            ReportlensError::InvalidConfig(_) | ReportlensError::Serialization(_) => {
                Disposition::Abort
            }
        }
    }

    /// Shorthand for a [`ReportlensError::MissingInput`].
    pub fn missing(case: impl Into<String>, what: impl Into<String>) -> Self {
        ReportlensError::MissingInput {
            case: case.into(),
            what: what.into(),
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ReportlensError>;
