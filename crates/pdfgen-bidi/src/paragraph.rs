// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Paragraph embedding level detection (simplified P2/P3).

use pdfgen_core::BaseDirection;

use crate::classify::{BidiClass, classify};

/// Paragraph level from the first strong character: 1 for `R`/`AL`, 0 for
/// `L`, 0 when the text has no strong character. Isolates are not skipped.
pub fn base_level(text: &str) -> u8 {
    text.chars()
        .map(classify)
        .find_map(|class| match class {
            BidiClass::R | BidiClass::AL => Some(1),
            BidiClass::L => Some(0),
            _ => None,
        })
        .unwrap_or(0)
}

/// Paragraph level honouring a forced direction.
pub fn paragraph_level(text: &str, direction: BaseDirection) -> u8 {
    direction
        .forced_level()
        .unwrap_or_else(|| base_level(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_strong_decides() {
        assert_eq!(base_level("אבג abc"), 1);
        assert_eq!(base_level("abc אבג"), 0);
        assert_eq!(base_level("123 سلام"), 1);
    }

    #[test]
    fn no_strong_defaults_to_ltr() {
        assert_eq!(base_level(""), 0);
        assert_eq!(base_level("12 + 34 = 46"), 0);
    }

    #[test]
    fn isolates_are_not_skipped() {
        // RLI ... PDI would hide the Hebrew under full UAX #9.
        assert_eq!(base_level("\u{2067}א\u{2069}abc"), 1);
    }

    #[test]
    fn forced_direction_overrides_detection() {
        assert_eq!(paragraph_level("abc", BaseDirection::Rtl), 1);
        assert_eq!(paragraph_level("אבג", BaseDirection::Ltr), 0);
        assert_eq!(paragraph_level("אבג", BaseDirection::Auto), 1);
    }
}
