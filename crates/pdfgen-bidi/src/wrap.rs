// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Word wrapping for right-to-left titles and table-of-contents entries.

use tracing::trace;

use crate::display::{BidiOptions, reorder_with_options};
use crate::shaping::Shaper;

/// Width used for page titles.
pub const DEFAULT_TITLE_WIDTH: usize = 27;

/// Greedy word fill. A word joins the current line only when the letters
/// already on it plus its own stay strictly below `max_len`; separating
/// spaces are not counted. The first word of a line is always accepted.
pub fn wrap_words(line: &str, max_len: usize) -> Vec<Vec<&str>> {
    let mut lines: Vec<Vec<&str>> = Vec::new();
    let mut used = 0usize;

    for word in line.split_whitespace() {
        let len = word.chars().count();
        match lines.last_mut() {
            Some(current) if used.saturating_add(len) < max_len => {
                current.push(word);
                used += len;
            }
            _ => {
                lines.push(vec![word]);
                used = len;
            }
        }
    }
    lines
}

/// Wrap `line` at `max_len`, shape it, and return it in display order.
///
/// Every wrapped line starts with one space and lines are joined by `\n`.
pub fn wrap_rtl_line(line: &str, max_len: usize, shaper: &impl Shaper) -> String {
    wrap_rtl_line_with_options(line, max_len, shaper, &BidiOptions::default())
}

/// [`wrap_rtl_line`] with a forced direction or mirroring turned off.
pub fn wrap_rtl_line_with_options(
    line: &str,
    max_len: usize,
    shaper: &impl Shaper,
    options: &BidiOptions,
) -> String {
    let lines = wrap_words(line, max_len);
    if lines.is_empty() {
        return String::new();
    }
    trace!(lines = lines.len(), max_len, "wrapped line");

    let logical = lines
        .iter()
        .map(|words| format!(" {}", words.join(" ")))
        .collect::<Vec<_>>()
        .join("\n");
    reorder_with_options(&shaper.shape(&logical), options)
}
