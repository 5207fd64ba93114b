// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-character state carried through the resolution stages.

use pdfgen_core::Direction;

use crate::classify::{BidiClass, classify};

/// One code point and its resolution state.
///
/// `class` is rewritten as rules fire; `orig_class` is what the classifier
/// said and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRecord {
    pub ch: char,
    pub class: BidiClass,
    pub orig_class: BidiClass,
    pub level: u8,
}

impl CharRecord {
    pub fn new(ch: char, class: BidiClass, level: u8) -> Self {
        Self {
            ch,
            class,
            orig_class: class,
            level,
        }
    }

    /// Direction implied by the embedding level.
    pub fn direction(&self) -> Direction {
        Direction::of_level(self.level)
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == Direction::Rtl
    }
}

/// Classify every code point of `text`, starting all of them at `base_level`.
pub(crate) fn build_sequence(text: &str, base_level: u8) -> Vec<CharRecord> {
    text.chars()
        .map(|ch| CharRecord::new(ch, classify(ch), base_level))
        .collect()
}

/// Build records from explicit classes, bypassing the classifier.
#[cfg(test)]
pub(crate) fn records_from_classes(classes: &[BidiClass], level: u8) -> Vec<CharRecord> {
    classes
        .iter()
        .enumerate()
        .map(|(i, &class)| {
            let ch = char::from_u32('a' as u32 + i as u32).unwrap_or('?');
            CharRecord::new(ch, class, level)
        })
        .collect()
}
