// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for reportlens.
//
// All text offsets are counted in `char`s, not bytes, so they line up with the
// renderer's per-character counter.

use serde::{Deserialize, Serialize};

/// Identifier of one case (patient), derived from image file stems.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CaseId(pub String);

impl CaseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-open character range `[start, end)` of report text to highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

impl HighlightSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self { start, end }
    }

    /// Whether the character at `offset` falls inside the span.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Character offset from which runs of blank lines are collapsed.
///
/// When the cutover anchor is absent the offset lies past the end of the
/// text, so no character ever enters the compact zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingCutover {
    pub offset: usize,
}

impl SpacingCutover {
    pub fn at(offset: usize) -> Self {
        Self { offset }
    }

    /// A cutover that never activates for a text of `text_len` characters.
    pub fn disabled(text_len: usize) -> Self {
        Self {
            offset: text_len + 1,
        }
    }

    /// Whether the character at `offset` is in the compact zone.
    pub fn in_compact_zone(&self, offset: usize) -> bool {
        offset >= self.offset
    }
}

/// Characters treated as whitespace by the layout rules: they never get a
/// highlight background and never clear the "previous was newline" flag.
pub fn is_layout_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}
