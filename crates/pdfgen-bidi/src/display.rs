// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Display-order conversion. Runs every stage over one input string, in
// order, and finishes with glyph mirroring.

use pdfgen_core::{BaseDirection, BidiConfig};
use tracing::{debug, instrument, trace};

use crate::record::{CharRecord, build_sequence};
use crate::{explicit, implicit, mirror, neutral, paragraph, reorder, weak};

/// Knobs the caller may set on the pipeline. Stage order is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidiOptions {
    /// Replaces paragraph level detection when not `Auto`.
    pub base_direction: BaseDirection,
    /// Apply rule L4 after reordering.
    pub mirror_glyphs: bool,
}

impl Default for BidiOptions {
    fn default() -> Self {
        Self {
            base_direction: BaseDirection::Auto,
            mirror_glyphs: true,
        }
    }
}

impl From<&BidiConfig> for BidiOptions {
    fn from(config: &BidiConfig) -> Self {
        Self {
            base_direction: config.base_direction,
            mirror_glyphs: config.mirror_glyphs,
        }
    }
}

/// Records in display order with their final levels.
#[derive(Debug, Clone)]
pub struct ResolvedParagraph {
    base_level: u8,
    records: Vec<CharRecord>,
}

impl ResolvedParagraph {
    /// Paragraph embedding level used for this text.
    pub fn base_level(&self) -> u8 {
        self.base_level
    }

    /// Records in display order.
    pub fn records(&self) -> &[CharRecord] {
        &self.records
    }

    /// Final level of every record, in display order.
    pub fn levels(&self) -> Vec<u8> {
        self.records.iter().map(|r| r.level).collect()
    }

    /// Display-order text without mirroring applied.
    pub fn text(&self) -> String {
        self.records.iter().map(|r| r.ch).collect()
    }

    /// Apply rule L4 and return the display-order text.
    pub fn into_mirrored_text(mut self) -> String {
        mirror::apply_mirroring(&mut self.records);
        self.text()
    }
}

/// Reorder `text` from logical to display order with default options.
pub fn reorder_for_display(text: &str) -> String {
    reorder_with_options(text, &BidiOptions::default())
}

/// Reorder `text` from logical to display order.
#[instrument(skip(text), fields(text_len = text.len()))]
pub fn reorder_with_options(text: &str, options: &BidiOptions) -> String {
    if text.is_empty() {
        return String::new();
    }
    let resolved = resolve_levels(text, options);
    if options.mirror_glyphs {
        resolved.into_mirrored_text()
    } else {
        resolved.text()
    }
}

/// Run every stage except mirroring and expose the resulting records.
pub fn resolve_levels(text: &str, options: &BidiOptions) -> ResolvedParagraph {
    let base_level = paragraph::paragraph_level(text, options.base_direction);
    debug!(base_level, "paragraph level resolved");

    let mut records = build_sequence(text, base_level);
    explicit::resolve_explicit(&mut records, base_level);
    weak::resolve_weak(&mut records);
    trace!("weak types resolved");
    neutral::resolve_neutral(&mut records);
    trace!("neutral types resolved");
    implicit::resolve_implicit(&mut records);
    reorder::reorder_levels(&mut records, base_level);
    debug!(
        max_level = records.iter().map(|r| r.level).max().unwrap_or(base_level),
        "levels reordered"
    );

    ResolvedParagraph {
        base_level,
        records,
    }
}
