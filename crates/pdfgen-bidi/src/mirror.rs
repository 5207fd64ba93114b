// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Glyph mirroring for characters displayed on right-to-left levels (rule L4).
//
// Pairs follow BidiMirroring.txt for brackets, quotation marks, relational
// and set operators, and CJK / full-width brackets.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::record::CharRecord;

/// Mirrored pairs, each listed once; the lookup map holds both directions.
static MIRROR_PAIRS: &[(char, char)] = &[
    // ASCII and Latin-1
    ('(', ')'),
    ('<', '>'),
    ('[', ']'),
    ('{', '}'),
    ('\u{00AB}', '\u{00BB}'),
    // General punctuation, super/subscripts
    ('\u{2039}', '\u{203A}'),
    ('\u{2045}', '\u{2046}'),
    ('\u{207D}', '\u{207E}'),
    ('\u{208D}', '\u{208E}'),
    // Mathematical operators
    ('\u{2208}', '\u{220B}'),
    ('\u{2209}', '\u{220C}'),
    ('\u{220A}', '\u{220D}'),
    ('\u{2215}', '\u{29F5}'),
    ('\u{223C}', '\u{223D}'),
    ('\u{2243}', '\u{22CD}'),
    ('\u{2252}', '\u{2253}'),
    ('\u{2254}', '\u{2255}'),
    ('\u{2264}', '\u{2265}'),
    ('\u{2266}', '\u{2267}'),
    ('\u{2268}', '\u{2269}'),
    ('\u{226A}', '\u{226B}'),
    ('\u{226E}', '\u{226F}'),
    ('\u{2270}', '\u{2271}'),
    ('\u{2272}', '\u{2273}'),
    ('\u{2274}', '\u{2275}'),
    ('\u{2276}', '\u{2277}'),
    ('\u{2278}', '\u{2279}'),
    ('\u{227A}', '\u{227B}'),
    ('\u{227C}', '\u{227D}'),
    ('\u{227E}', '\u{227F}'),
    ('\u{2280}', '\u{2281}'),
    ('\u{2282}', '\u{2283}'),
    ('\u{2284}', '\u{2285}'),
    ('\u{2286}', '\u{2287}'),
    ('\u{2288}', '\u{2289}'),
    ('\u{228A}', '\u{228B}'),
    ('\u{228F}', '\u{2290}'),
    ('\u{2291}', '\u{2292}'),
    ('\u{2298}', '\u{29B8}'),
    ('\u{22A2}', '\u{22A3}'),
    ('\u{22A6}', '\u{2ADE}'),
    ('\u{22A8}', '\u{2AE4}'),
    ('\u{22A9}', '\u{2AE3}'),
    ('\u{22AB}', '\u{2AE5}'),
    ('\u{22B0}', '\u{22B1}'),
    ('\u{22B2}', '\u{22B3}'),
    ('\u{22B4}', '\u{22B5}'),
    ('\u{22B6}', '\u{22B7}'),
    ('\u{22C9}', '\u{22CA}'),
    ('\u{22CB}', '\u{22CC}'),
    ('\u{22D0}', '\u{22D1}'),
    ('\u{22D6}', '\u{22D7}'),
    ('\u{22D8}', '\u{22D9}'),
    ('\u{22DA}', '\u{22DB}'),
    ('\u{22DC}', '\u{22DD}'),
    ('\u{22DE}', '\u{22DF}'),
    ('\u{22E0}', '\u{22E1}'),
    ('\u{22E2}', '\u{22E3}'),
    ('\u{22E4}', '\u{22E5}'),
    ('\u{22E6}', '\u{22E7}'),
    ('\u{22E8}', '\u{22E9}'),
    ('\u{22EA}', '\u{22EB}'),
    ('\u{22EC}', '\u{22ED}'),
    ('\u{22F0}', '\u{22F1}'),
    ('\u{22F2}', '\u{22FA}'),
    ('\u{22F3}', '\u{22FB}'),
    ('\u{22F4}', '\u{22FC}'),
    ('\u{22F6}', '\u{22FD}'),
    ('\u{22F7}', '\u{22FE}'),
    // Technical
    ('\u{2308}', '\u{2309}'),
    ('\u{230A}', '\u{230B}'),
    ('\u{2329}', '\u{232A}'),
    // Dingbat brackets
    ('\u{2768}', '\u{2769}'),
    ('\u{276A}', '\u{276B}'),
    ('\u{276C}', '\u{276D}'),
    ('\u{276E}', '\u{276F}'),
    ('\u{2770}', '\u{2771}'),
    ('\u{2772}', '\u{2773}'),
    ('\u{2774}', '\u{2775}'),
    // Miscellaneous mathematical symbols A/B
    ('\u{27C3}', '\u{27C4}'),
    ('\u{27C5}', '\u{27C6}'),
    ('\u{27C8}', '\u{27C9}'),
    ('\u{27CB}', '\u{27CD}'),
    ('\u{27D5}', '\u{27D6}'),
    ('\u{27DD}', '\u{27DE}'),
    ('\u{27E2}', '\u{27E3}'),
    ('\u{27E4}', '\u{27E5}'),
    ('\u{27E6}', '\u{27E7}'),
    ('\u{27E8}', '\u{27E9}'),
    ('\u{27EA}', '\u{27EB}'),
    ('\u{27EC}', '\u{27ED}'),
    ('\u{27EE}', '\u{27EF}'),
    ('\u{2983}', '\u{2984}'),
    ('\u{2985}', '\u{2986}'),
    ('\u{2987}', '\u{2988}'),
    ('\u{2989}', '\u{298A}'),
    ('\u{298B}', '\u{298C}'),
    ('\u{298D}', '\u{2990}'),
    ('\u{298E}', '\u{298F}'),
    ('\u{2991}', '\u{2992}'),
    ('\u{2993}', '\u{2994}'),
    ('\u{2995}', '\u{2996}'),
    ('\u{2997}', '\u{2998}'),
    ('\u{29C0}', '\u{29C1}'),
    ('\u{29C4}', '\u{29C5}'),
    ('\u{29CF}', '\u{29D0}'),
    ('\u{29D1}', '\u{29D2}'),
    ('\u{29D4}', '\u{29D5}'),
    ('\u{29D8}', '\u{29D9}'),
    ('\u{29DA}', '\u{29DB}'),
    ('\u{29F8}', '\u{29F9}'),
    ('\u{29FC}', '\u{29FD}'),
    // Supplemental punctuation
    ('\u{2E02}', '\u{2E03}'),
    ('\u{2E04}', '\u{2E05}'),
    ('\u{2E09}', '\u{2E0A}'),
    ('\u{2E0C}', '\u{2E0D}'),
    ('\u{2E1C}', '\u{2E1D}'),
    ('\u{2E20}', '\u{2E21}'),
    ('\u{2E22}', '\u{2E23}'),
    ('\u{2E24}', '\u{2E25}'),
    ('\u{2E26}', '\u{2E27}'),
    ('\u{2E28}', '\u{2E29}'),
    // CJK brackets
    ('\u{3008}', '\u{3009}'),
    ('\u{300A}', '\u{300B}'),
    ('\u{300C}', '\u{300D}'),
    ('\u{300E}', '\u{300F}'),
    ('\u{3010}', '\u{3011}'),
    ('\u{3014}', '\u{3015}'),
    ('\u{3016}', '\u{3017}'),
    ('\u{3018}', '\u{3019}'),
    ('\u{301A}', '\u{301B}'),
    // Small and full-width forms
    ('\u{FE59}', '\u{FE5A}'),
    ('\u{FE5B}', '\u{FE5C}'),
    ('\u{FE5D}', '\u{FE5E}'),
    ('\u{FE64}', '\u{FE65}'),
    ('\u{FF08}', '\u{FF09}'),
    ('\u{FF1C}', '\u{FF1E}'),
    ('\u{FF3B}', '\u{FF3D}'),
    ('\u{FF5B}', '\u{FF5D}'),
    ('\u{FF5F}', '\u{FF60}'),
    ('\u{FF62}', '\u{FF63}'),
];

static MIRRORS: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    MIRROR_PAIRS
        .iter()
        .flat_map(|&(a, b)| [(a, b), (b, a)])
        .collect()
});

/// Return the mirrored counterpart of `ch`, if it has one.
pub fn mirrored(ch: char) -> Option<char> {
    MIRRORS.get(&ch).copied()
}

/// Rule L4: swap every mirrorable glyph that sits on an odd level.
pub(crate) fn apply_mirroring(records: &mut [CharRecord]) {
    for record in records.iter_mut().filter(|r| r.is_rtl()) {
        if let Some(mirror) = mirrored(record.ch) {
            record.ch = mirror;
        }
    }
}
