// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Line-level level reset and visual reordering (L1–L2).

use tracing::debug;

use crate::classify::BidiClass;
use crate::record::CharRecord;

/// Resolved levels can exceed the explicit limit by the two implicit steps.
pub const MAX_RESOLVED_LEVEL: u8 = crate::explicit::MAX_EXPLICIT_LEVEL + 2;

/// Rule L1, scanning backwards from the end of the sequence.
///
/// Separators are forced to the paragraph level, as is whitespace (or a
/// boundary neutral) that precedes something already at the paragraph level.
/// The scan stops at the first record that does neither.
pub(crate) fn reset_trailing_levels(records: &mut [CharRecord], base_level: u8) {
    for i in (0..records.len()).rev() {
        let next_at_base = records.get(i + 1).is_none_or(|r| r.level == base_level);
        let record = &mut records[i];
        match record.orig_class {
            BidiClass::B | BidiClass::S => record.level = base_level,
            BidiClass::WS | BidiClass::BN if next_at_base => record.level = base_level,
            _ => break,
        }
    }
}

fn ends_line(record: &CharRecord) -> bool {
    record.orig_class == BidiClass::B || record.ch == '\n'
}

/// Rule L2 for every line. A line ends at a paragraph separator or line
/// feed; the separator itself stays in place.
pub(crate) fn reorder_lines(records: &mut [CharRecord], base_level: u8) {
    let mut line_start = 0;
    let mut lines = 0usize;
    for i in 0..records.len() {
        let is_break = ends_line(&records[i]);
        if !is_break && i + 1 != records.len() {
            continue;
        }
        let line_end = if is_break { i } else { i + 1 };
        if line_start < line_end {
            reverse_by_level(&mut records[line_start..line_end], base_level);
        }
        lines += 1;
        line_start = i + 1;
    }
    debug!(lines, "lines reordered");
}

/// From the highest level down to the lowest odd level not below the
/// paragraph level, reverse every maximal run at or above that level.
fn reverse_by_level(line: &mut [CharRecord], base_level: u8) {
    let Some(max_level) = line.iter().map(|r| r.level).max() else {
        return;
    };
    let lowest_odd = if base_level % 2 == 0 { base_level + 1 } else { base_level };

    for level in (lowest_odd..=max_level).rev() {
        let mut j = 0;
        while j < line.len() {
            if line[j].level < level {
                j += 1;
                continue;
            }
            let start = j;
            while j < line.len() && line[j].level >= level {
                j += 1;
            }
            line[start..j].reverse();
        }
    }
}

pub(crate) fn reorder_levels(records: &mut [CharRecord], base_level: u8) {
    reset_trailing_levels(records, base_level);
    reorder_lines(records, base_level);
}
