// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bidi class lookup for single code points.
//
// The source table is an ordered list of possibly overlapping ranges where the
// first match wins. On first use it is flattened into sorted, disjoint ranges
// so lookups are a binary search with the same answers as the linear scan.

mod tables;

use std::cmp::Ordering::{Equal, Greater, Less};
use std::sync::LazyLock;

use self::tables::BIDI_RANGES;

/// Bidirectional character types (UAX #9, table 4).
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidiClass {
    /// Left-to-right letter.
    L,
    /// Right-to-left letter (Hebrew and similar).
    R,
    /// Arabic letter.
    AL,
    EN,
    ES,
    ET,
    AN,
    CS,
    NSM,
    BN,
    B,
    S,
    WS,
    ON,
    LRE,
    LRO,
    RLE,
    RLO,
    PDF,
    LRI,
    RLI,
    FSI,
    PDI,
}

impl BidiClass {
    /// `L`, `R` or `AL`.
    pub fn is_strong(self) -> bool {
        matches!(self, Self::L | Self::R | Self::AL)
    }

    /// Embedding and override initiators (`LRE`, `RLE`, `LRO`, `RLO`).
    pub fn is_embedding_push(self) -> bool {
        matches!(self, Self::LRE | Self::RLE | Self::LRO | Self::RLO)
    }

    /// Classes removed from the sequence once explicit levels are assigned (X9).
    pub fn is_removed_by_x9(self) -> bool {
        self.is_embedding_push() || matches!(self, Self::PDF | Self::BN)
    }

    /// Isolate initiators and terminator. Classified but never resolved: they
    /// keep their class through every stage.
    pub fn is_isolate_control(self) -> bool {
        matches!(self, Self::LRI | Self::RLI | Self::FSI | Self::PDI)
    }
}

static LOOKUP: LazyLock<Vec<(u32, u32, BidiClass)>> = LazyLock::new(|| flatten(BIDI_RANGES));

/// Find the bidi class of a single char. Unlisted code points are `ON`.
pub fn classify(c: char) -> BidiClass {
    bsearch_range_value_table(c as u32, &LOOKUP)
}

fn bsearch_range_value_table(cp: u32, r: &[(u32, u32, BidiClass)]) -> BidiClass {
    match r.binary_search_by(|&(lo, hi, _)| {
        if lo <= cp && cp <= hi {
            Equal
        } else if hi < cp {
            Less
        } else {
            Greater
        }
    }) {
        Ok(idx) => r[idx].2,
        Err(_) => BidiClass::ON,
    }
}

/// First range in priority order that contains `cp`.
fn first_match_in(table: &[(u32, u32, BidiClass)], cp: u32) -> Option<BidiClass> {
    table
        .iter()
        .find(|&&(lo, hi, _)| lo <= cp && cp <= hi)
        .map(|&(_, _, class)| class)
}

/// Turn a priority-ordered, overlapping table into sorted disjoint ranges.
///
/// Every range start and every range end + 1 is a cut point; between two
/// adjacent cut points the set of covering ranges is constant, so the class
/// of the whole segment is the first match at its start.
fn flatten(table: &[(u32, u32, BidiClass)]) -> Vec<(u32, u32, BidiClass)> {
    let mut cuts: Vec<u32> = table.iter().flat_map(|&(lo, hi, _)| [lo, hi + 1]).collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut flat: Vec<(u32, u32, BidiClass)> = Vec::with_capacity(table.len());
    for window in cuts.windows(2) {
        let (lo, hi) = (window[0], window[1] - 1);
        let Some(class) = first_match_in(table, lo) else {
            continue;
        };
        match flat.last_mut() {
            Some(last) if last.1 + 1 == lo && last.2 == class => last.1 = hi,
            _ => flat.push((lo, hi, class)),
        }
    }
    flat
}
