// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Neutral type resolution (N1–N2).

use crate::classify::BidiClass::{self, *};
use crate::record::CharRecord;

/// Separators, whitespace and other neutrals take their direction from
/// context. Isolate controls keep their own class and only act as a boundary
/// that is neither `L` nor `R`.
fn is_neutral(class: BidiClass) -> bool {
    matches!(class, B | S | WS | ON)
}

/// Numbers count as `R` when looking at the context of a neutral run.
fn context_direction(class: BidiClass) -> BidiClass {
    match class {
        AN | EN => R,
        other => other,
    }
}

pub(crate) fn resolve_neutral(records: &mut [CharRecord]) {
    let mut i = 0;
    while i < records.len() {
        if !is_neutral(records[i].class) {
            i += 1;
            continue;
        }

        let start = i;
        while i < records.len() && is_neutral(records[i].class) {
            i += 1;
        }
        let end = i;

        // sor and eor are both L.
        let prev = start
            .checked_sub(1)
            .map_or(L, |p| context_direction(records[p].class));
        let next = records
            .get(end)
            .map_or(L, |r| context_direction(r.class));

        let run = &mut records[start..end];
        if prev == next && matches!(prev, L | R) {
            // N1
            for record in run {
                record.class = prev;
            }
        } else {
            // N2
            for record in run {
                record.class = if record.level % 2 == 0 { L } else { R };
            }
        }
    }
}
