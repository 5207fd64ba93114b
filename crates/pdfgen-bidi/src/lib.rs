// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdfgen-bidi — Logical-to-display reordering for the PdfGen document generator.
//
// Classifies every character, resolves embedding levels through the explicit,
// weak, neutral, and implicit stages, reorders each line by level, and mirrors
// paired glyphs in right-to-left runs. Byte input in any WHATWG encoding, an
// optional shaping hook, and the word-wrapper used for page titles sit on top.

pub mod classify;
pub mod display;
pub mod encoding;
pub mod explicit;
pub mod mirror;
pub mod paragraph;
pub mod record;
pub mod reorder;
pub mod shaping;
pub mod wrap;

mod implicit;
mod neutral;
mod weak;

// Re-export the entry points so callers can use `pdfgen_bidi::reorder_for_display` etc.
pub use classify::{BidiClass, classify};
pub use display::{
    BidiOptions, ResolvedParagraph, reorder_for_display, reorder_with_options, resolve_levels,
};
pub use encoding::{reorder_bytes_for_display, reorder_bytes_with_options};
pub use paragraph::{base_level, paragraph_level};
pub use record::CharRecord;
pub use shaping::{NoShaping, Shaper, reorder_shaped};
pub use wrap::{wrap_rtl_line, wrap_rtl_line_with_options, wrap_words};
