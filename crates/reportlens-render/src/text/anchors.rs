// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Anchor search. Locates the highlighted findings span and the spacing
// cutover by plain substring search. Offsets returned are in chars.

use reportlens_core::{HighlightSpan, SpacingCutover};

/// Find the text strictly between the first `start_anchor` and the nearest
/// `end_anchor` after it.
///
/// Returns `None` when either anchor is missing or the end anchor only occurs
/// before the start anchor. The span may be empty when the anchors are
/// adjacent.
pub fn locate_highlight(text: &str, start_anchor: &str, end_anchor: &str) -> Option<HighlightSpan> {
    let open = text.find(start_anchor)?;
    let body = open + start_anchor.len();
    let close = body + text[body..].find(end_anchor)?;
    Some(HighlightSpan::new(
        char_offset(text, body),
        char_offset(text, close),
    ))
}

/// Offset just past the first `anchor`, or a disabled cutover when absent.
pub fn locate_cutover(text: &str, anchor: &str) -> SpacingCutover {
    match text.find(anchor) {
        Some(pos) => SpacingCutover::at(char_offset(text, pos + anchor.len())),
        None => SpacingCutover::disabled(text.chars().count()),
    }
}

/// Convert a byte offset on a char boundary into a char offset.
fn char_offset(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}
