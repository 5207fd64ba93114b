// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Explicit embedding levels and directional overrides (X1–X9).
//
// The next level is computed from the current level only ("next odd" or
// "next even" above it), not from the maximum over all open frames.

use tracing::debug;

use crate::classify::BidiClass;
use crate::record::CharRecord;

/// Highest embedding level an explicit push may reach.
pub const MAX_EXPLICIT_LEVEL: u8 = 62;

/// Maximum number of saved frames on the embedding stack.
pub const MAX_STACK_DEPTH: usize = 61;

/// Level and override in effect at some point of the paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EmbeddingState {
    level: u8,
    override_class: Option<BidiClass>,
}

/// Push-down stack of saved states, bounded at `MAX_STACK_DEPTH`.
#[derive(Debug)]
struct EmbeddingStack {
    frames: Vec<EmbeddingState>,
}

impl EmbeddingStack {
    fn new() -> Self {
        Self {
            frames: Vec::with_capacity(8),
        }
    }

    /// Save `state`. Returns `false` (and saves nothing) when full.
    fn push(&mut self, state: EmbeddingState) -> bool {
        if self.frames.len() >= MAX_STACK_DEPTH {
            return false;
        }
        self.frames.push(state);
        true
    }

    fn pop(&mut self) -> Option<EmbeddingState> {
        self.frames.pop()
    }

    fn clear(&mut self) {
        self.frames.clear();
    }
}

/// Level an embedding/override initiator opens above `level`.
fn next_level(control: BidiClass, level: u8) -> u8 {
    match control {
        BidiClass::RLE | BidiClass::RLO => (level + 1) | 1,
        _ => (level + 2) & !1,
    }
}

fn override_for(control: BidiClass) -> Option<BidiClass> {
    match control {
        BidiClass::LRO => Some(BidiClass::L),
        BidiClass::RLO => Some(BidiClass::R),
        _ => None,
    }
}

/// Assign explicit levels, apply overrides, then drop the formatting
/// characters and boundary neutrals (X9).
///
/// Returns how many pushes were ignored because of the depth limits.
pub(crate) fn resolve_explicit(records: &mut Vec<CharRecord>, base_level: u8) -> usize {
    let base = EmbeddingState {
        level: base_level,
        override_class: None,
    };
    let mut current = base;
    let mut stack = EmbeddingStack::new();
    let mut dropped_pushes = 0usize;

    for record in records.iter_mut() {
        let class = record.class;
        match class {
            BidiClass::LRE | BidiClass::RLE | BidiClass::LRO | BidiClass::RLO => {
                let level = next_level(class, current.level);
                if level <= MAX_EXPLICIT_LEVEL && stack.push(current) {
                    current = EmbeddingState {
                        level,
                        override_class: override_for(class),
                    };
                } else {
                    dropped_pushes += 1;
                }
            }
            BidiClass::PDF => {
                if let Some(saved) = stack.pop() {
                    current = saved;
                }
            }
            BidiClass::B => {
                stack.clear();
                current = base;
            }
            _ => {}
        }

        if !class.is_removed_by_x9() {
            record.level = current.level;
            if let Some(forced) = current.override_class {
                record.class = forced;
            }
        }
    }

    if dropped_pushes > 0 {
        debug!(dropped_pushes, "embedding depth limit reached; extra pushes ignored");
    }

    let before = records.len();
    records.retain(|r| !r.class.is_removed_by_x9());
    debug!(removed = before - records.len(), "explicit levels resolved");

    dropped_pushes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::build_sequence;

    fn levels(records: &[CharRecord]) -> Vec<u8> {
        records.iter().map(|r| r.level).collect()
    }

    #[test]
    fn next_levels_keep_parity() {
        assert_eq!(next_level(BidiClass::RLE, 0), 1);
        assert_eq!(next_level(BidiClass::RLE, 1), 3);
        assert_eq!(next_level(BidiClass::LRE, 0), 2);
        assert_eq!(next_level(BidiClass::LRE, 1), 2);
        assert_eq!(next_level(BidiClass::LRO, 2), 4);
    }

    #[test]
    fn embedding_raises_enclosed_text() {
        let mut records = build_sequence("a\u{202B}b\u{202C}c", 0);
        resolve_explicit(&mut records, 0);
        let text: String = records.iter().map(|r| r.ch).collect();
        assert_eq!(text, "abc");
        assert_eq!(levels(&records), vec![0, 1, 0]);
    }

    #[test]
    fn override_forces_class() {
        let mut records = build_sequence("\u{202E}ab 1\u{202C}c", 0);
        resolve_explicit(&mut records, 0);
        let classes: Vec<BidiClass> = records.iter().map(|r| r.class).collect();
        assert_eq!(
            classes,
            vec![BidiClass::R, BidiClass::R, BidiClass::R, BidiClass::R, BidiClass::L]
        );
        // orig_class is untouched by the override.
        assert_eq!(records[2].orig_class, BidiClass::WS);
        assert_eq!(records[3].orig_class, BidiClass::EN);
    }

    #[test]
    fn unmatched_pdf_is_ignored() {
        let mut records = build_sequence("a\u{202C}b", 1);
        resolve_explicit(&mut records, 1);
        assert_eq!(levels(&records), vec![1, 1]);
    }

    #[test]
    fn paragraph_separator_resets_state() {
        let mut records = build_sequence("\u{202B}\u{202B}a\nb", 0);
        resolve_explicit(&mut records, 0);
        assert_eq!(levels(&records), vec![3, 0, 0]);
    }

    #[test]
    fn boundary_neutrals_are_removed() {
        let mut records = build_sequence("a\u{200B}b\u{FEFF}", 0);
        resolve_explicit(&mut records, 0);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn deep_nesting_is_capped() {
        let text = format!("{}x", "\u{202A}".repeat(100));
        let mut records = build_sequence(&text, 0);
        let dropped = resolve_explicit(&mut records, 0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, MAX_EXPLICIT_LEVEL);
        // 0 -> 2 -> ... -> 62 takes 31 pushes.
        assert_eq!(dropped, 100 - 31);
    }

    #[test]
    fn stack_depth_is_bounded() {
        // Alternating pushes climb one level at a time and hit the frame
        // limit before the level limit.
        let controls: String = (0..80)
            .map(|i| if i % 2 == 0 { '\u{202B}' } else { '\u{202A}' })
            .collect();
        let text = format!("{controls}x");
        let mut records = build_sequence(&text, 0);
        let dropped = resolve_explicit(&mut records, 0);
        assert!(records[0].level <= MAX_EXPLICIT_LEVEL);
        assert!(dropped >= 80 - MAX_STACK_DEPTH);
    }
}
