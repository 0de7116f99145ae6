// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout module — character-stream layout, painting, and the report renderer
// tying them together.

pub mod engine;
pub mod paint;
pub mod renderer;

pub use engine::{Cursor, HighlightBox, Layout, PlacedGlyph, layout_text};
pub use paint::paint;
