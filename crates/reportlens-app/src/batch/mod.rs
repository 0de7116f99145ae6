// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch processing — case discovery and the per-case merge pipeline.

pub mod discovery;
pub mod driver;

pub use discovery::{CaseImages, discover_cases};
pub use driver::{BatchRunner, BatchSummary, SkippedCase};
