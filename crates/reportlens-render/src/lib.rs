// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// reportlens-render — Report rendering for reportlens.
//
// Provides report loading with permissive decoding, anchor-based highlight and
// spacing detection, glyph faces (TrueType with a built-in fallback), a
// character-stream layout engine, painting onto an RGB canvas, and side-by-side
// composition with scan images.

pub mod compose;
pub mod font;
pub mod layout;
pub mod text;

// Re-export the primary entry points so callers can use `reportlens_render::ReportRenderer` etc.
pub use compose::{compose_row, open_rgb, pad_to_height, save_png};
pub use font::{BuiltinFace, GlyphFace, TrueTypeFace, load_or_fallback};
pub use layout::renderer::{RenderedReport, ReportRenderer};
pub use text::anchors::{locate_cutover, locate_highlight};
pub use text::report::{decode_permissive, read_report};
