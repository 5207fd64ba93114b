// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Contextual shaping hook. The pipeline never shapes text itself; callers
// that need Arabic presentation forms plug a shaper in ahead of reordering.

use std::borrow::Cow;

use crate::display::reorder_for_display;

/// Converts logical-order text into its shaped form before reordering.
pub trait Shaper {
    fn shape<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Identity shaper.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShaping;

impl Shaper for NoShaping {
    fn shape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

impl<F> Shaper for F
where
    F: Fn(&str) -> String,
{
    fn shape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(text))
    }
}

/// Shape `text`, then reorder it for display.
pub fn reorder_shaped(text: &str, shaper: &impl Shaper) -> String {
    let shaped = shaper.shape(text);
    reorder_for_display(&shaped)
}
