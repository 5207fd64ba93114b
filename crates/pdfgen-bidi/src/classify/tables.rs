// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bidi class ranges, in priority order. The first range containing a code
// point decides its class, so exceptions are listed before the broad block
// ranges they punch holes into. Unlisted code points are `ON`.
//
// Separators come before whitespace on purpose, so LF, CR and the other
// paragraph breaks are `B` and TAB is `S` rather than `WS`. Arabic letters are
// `AL`, never `R`, so W2 can turn the digits after them into `AN`.

use super::BidiClass::{self, *};

pub(crate) static BIDI_RANGES: &[(u32, u32, BidiClass)] = &[
    // -- Paragraph and segment separators --
    (0x000A, 0x000A, B),
    (0x000D, 0x000D, B),
    (0x001C, 0x001E, B),
    (0x0085, 0x0085, B),
    (0x2029, 0x2029, B),
    (0x0009, 0x0009, S),
    (0x000B, 0x000B, S),
    (0x001F, 0x001F, S),
    // -- Whitespace --
    (0x000C, 0x000C, WS),
    (0x0020, 0x0020, WS),
    (0x1680, 0x1680, WS),
    (0x2000, 0x200A, WS),
    (0x2028, 0x2028, WS),
    (0x205F, 0x205F, WS),
    (0x3000, 0x3000, WS),
    // -- Explicit formatting, isolates and marks --
    (0x202A, 0x202A, LRE),
    (0x202B, 0x202B, RLE),
    (0x202C, 0x202C, PDF),
    (0x202D, 0x202D, LRO),
    (0x202E, 0x202E, RLO),
    (0x2066, 0x2066, LRI),
    (0x2067, 0x2067, RLI),
    (0x2068, 0x2068, FSI),
    (0x2069, 0x2069, PDI),
    (0x200E, 0x200E, L),
    (0x200F, 0x200F, R),
    (0x061C, 0x061C, AL),
    // -- Boundary neutrals --
    (0x0000, 0x0008, BN),
    (0x000E, 0x001B, BN),
    (0x007F, 0x0084, BN),
    (0x0086, 0x009F, BN),
    (0x00AD, 0x00AD, BN),
    (0x180E, 0x180E, BN),
    (0x200B, 0x200D, BN),
    (0x2060, 0x2064, BN),
    (0x206A, 0x206F, BN),
    (0xFEFF, 0xFEFF, BN),
    // -- European numbers --
    (0x0030, 0x0039, EN),
    (0x00B2, 0x00B3, EN),
    (0x00B9, 0x00B9, EN),
    (0x06F0, 0x06F9, EN),
    (0x2070, 0x2070, EN),
    (0x2074, 0x2079, EN),
    (0x2080, 0x2089, EN),
    (0x2488, 0x249B, EN),
    (0xFF10, 0xFF19, EN),
    (0x1D7CE, 0x1D7FF, EN),
    // -- Arabic numbers --
    (0x0600, 0x0605, AN),
    (0x0660, 0x0669, AN),
    (0x066B, 0x066C, AN),
    (0x06DD, 0x06DD, AN),
    (0x0890, 0x0891, AN),
    (0x08E2, 0x08E2, AN),
    // -- European separators --
    (0x002B, 0x002B, ES),
    (0x002D, 0x002D, ES),
    (0x207A, 0x207B, ES),
    (0x208A, 0x208B, ES),
    (0x2212, 0x2212, ES),
    (0xFB29, 0xFB29, ES),
    (0xFE62, 0xFE63, ES),
    (0xFF0B, 0xFF0B, ES),
    (0xFF0D, 0xFF0D, ES),
    // -- European terminators --
    (0x0023, 0x0025, ET),
    (0x00A2, 0x00A5, ET),
    (0x00B0, 0x00B1, ET),
    (0x058F, 0x058F, ET),
    (0x0609, 0x060A, ET),
    (0x066A, 0x066A, ET),
    (0x2030, 0x2034, ET),
    (0x20A0, 0x20CF, ET),
    (0x212E, 0x212E, ET),
    (0x2213, 0x2213, ET),
    (0xFE5F, 0xFE5F, ET),
    (0xFE69, 0xFE6A, ET),
    (0xFF03, 0xFF05, ET),
    (0xFFE0, 0xFFE1, ET),
    (0xFFE5, 0xFFE6, ET),
    // -- Common separators --
    (0x002C, 0x002C, CS),
    (0x002E, 0x002F, CS),
    (0x003A, 0x003A, CS),
    (0x00A0, 0x00A0, CS),
    (0x060C, 0x060C, CS),
    (0x202F, 0x202F, CS),
    (0x2044, 0x2044, CS),
    (0xFE50, 0xFE50, CS),
    (0xFE52, 0xFE52, CS),
    (0xFE55, 0xFE55, CS),
    (0xFF0C, 0xFF0C, CS),
    (0xFF0E, 0xFF0F, CS),
    (0xFF1A, 0xFF1A, CS),
    // -- Nonspacing marks --
    (0x0300, 0x036F, NSM),
    (0x0483, 0x0489, NSM),
    (0x0591, 0x05BD, NSM),
    (0x05BF, 0x05BF, NSM),
    (0x05C1, 0x05C2, NSM),
    (0x05C4, 0x05C5, NSM),
    (0x05C7, 0x05C7, NSM),
    (0x0610, 0x061A, NSM),
    (0x064B, 0x065F, NSM),
    (0x0670, 0x0670, NSM),
    (0x06D6, 0x06DC, NSM),
    (0x06DF, 0x06E4, NSM),
    (0x06E7, 0x06E8, NSM),
    (0x06EA, 0x06ED, NSM),
    (0x0711, 0x0711, NSM),
    (0x0730, 0x074A, NSM),
    (0x07A6, 0x07B0, NSM),
    (0x0898, 0x089F, NSM),
    (0x08CA, 0x08E1, NSM),
    (0x08E3, 0x08FF, NSM),
    (0x20D0, 0x20F0, NSM),
    (0x3099, 0x309A, NSM),
    (0xFB1E, 0xFB1E, NSM),
    (0xFE00, 0xFE0F, NSM),
    (0xFE20, 0xFE2F, NSM),
    // -- Neutral punctuation and symbols inside otherwise strong blocks --
    (0x0021, 0x0022, ON),
    (0x0026, 0x002A, ON),
    (0x003B, 0x0040, ON),
    (0x005B, 0x0060, ON),
    (0x007B, 0x007E, ON),
    (0x00A1, 0x00A1, ON),
    (0x00A6, 0x00A9, ON),
    (0x00AB, 0x00AC, ON),
    (0x00AE, 0x00AF, ON),
    (0x00B4, 0x00B4, ON),
    (0x00B6, 0x00B8, ON),
    (0x00BB, 0x00BF, ON),
    (0x00D7, 0x00D7, ON),
    (0x00F7, 0x00F7, ON),
    (0x02B9, 0x02BA, ON),
    (0x02C2, 0x02CF, ON),
    (0x02D2, 0x02DF, ON),
    (0x02E5, 0x02ED, ON),
    (0x02EF, 0x02FF, ON),
    (0x0374, 0x0375, ON),
    (0x037E, 0x037E, ON),
    (0x0384, 0x0385, ON),
    (0x0387, 0x0387, ON),
    (0x03F6, 0x03F6, ON),
    (0x058A, 0x058A, ON),
    (0x058D, 0x058E, ON),
    (0x0606, 0x0607, ON),
    (0x060E, 0x060F, ON),
    (0x06DE, 0x06DE, ON),
    (0x06E9, 0x06E9, ON),
    (0x1FBD, 0x1FBD, ON),
    (0x1FBF, 0x1FC1, ON),
    (0x1FCD, 0x1FCF, ON),
    (0x1FDD, 0x1FDF, ON),
    (0x1FED, 0x1FEF, ON),
    (0x1FFD, 0x1FFE, ON),
    (0xFD3E, 0xFD4F, ON),
    (0xFDCF, 0xFDCF, ON),
    (0xFDFD, 0xFDFF, ON),
    // -- Hebrew --
    (0x0590, 0x05FF, R),
    (0xFB1D, 0xFB4F, R),
    // -- Syriac, Thaana, NKo, Samaritan, Mandaic --
    (0x0700, 0x074F, AL),
    (0x0780, 0x07BF, AL),
    (0x07C0, 0x085F, R),
    // -- Arabic and its presentation forms --
    (0x0600, 0x06FF, AL),
    (0x0750, 0x077F, AL),
    (0x0860, 0x08FF, AL),
    (0xFB50, 0xFDFF, AL),
    (0xFE70, 0xFEFE, AL),
    // -- Latin, Greek, Cyrillic, Armenian --
    (0x0041, 0x005A, L),
    (0x0061, 0x007A, L),
    (0x00AA, 0x00AA, L),
    (0x00B5, 0x00B5, L),
    (0x00BA, 0x00BA, L),
    (0x00C0, 0x00D6, L),
    (0x00D8, 0x00F6, L),
    (0x00F8, 0x02B8, L),
    (0x02BB, 0x02C1, L),
    (0x02D0, 0x02D1, L),
    (0x02E0, 0x02E4, L),
    (0x02EE, 0x02EE, L),
    (0x0370, 0x0482, L),
    (0x048A, 0x058F, L),
    (0x1E00, 0x1FFF, L),
    (0x2C00, 0x2DFF, L),
    (0xA640, 0xA7FF, L),
    (0xFB00, 0xFB17, L),
    // -- General punctuation, letterlike symbols, number forms --
    (0x2010, 0x2027, ON),
    (0x2035, 0x2043, ON),
    (0x2045, 0x205E, ON),
    (0x207C, 0x207E, ON),
    (0x208C, 0x208E, ON),
    (0x2102, 0x2102, L),
    (0x2107, 0x2107, L),
    (0x210A, 0x2113, L),
    (0x2115, 0x2115, L),
    (0x2119, 0x211D, L),
    (0x2124, 0x2124, L),
    (0x2126, 0x2126, L),
    (0x2128, 0x2128, L),
    (0x212A, 0x212D, L),
    (0x212F, 0x2139, L),
    (0x2100, 0x214F, ON),
    (0x2150, 0x215F, ON),
    (0x2160, 0x2188, L),
    // -- Arrows, mathematical operators, technical, dingbats --
    (0x2336, 0x237A, L),
    (0x2395, 0x2395, L),
    (0x249C, 0x24E9, L),
    (0x26AC, 0x26AC, L),
    (0x2800, 0x28FF, L),
    (0x2190, 0x2BFF, ON),
    (0x2E00, 0x2E5D, ON),
    // -- CJK punctuation, kana, ideographs, Hangul --
    (0x3001, 0x3004, ON),
    (0x3005, 0x3007, L),
    (0x3008, 0x3020, ON),
    (0x3021, 0x3029, L),
    (0x3030, 0x3030, ON),
    (0x3036, 0x3037, ON),
    (0x303D, 0x303F, ON),
    (0x309B, 0x309C, ON),
    (0x30A0, 0x30A0, ON),
    (0x30FB, 0x30FB, ON),
    (0x3041, 0x30FF, L),
    (0x3100, 0x9FFF, L),
    (0xA000, 0xA4CF, L),
    (0xAC00, 0xD7FF, L),
    (0xF900, 0xFAFF, L),
    // -- Vertical, small and full-width forms --
    (0xFE10, 0xFE19, ON),
    (0xFE30, 0xFE6B, ON),
    (0xFF01, 0xFF02, ON),
    (0xFF06, 0xFF0A, ON),
    (0xFF1B, 0xFF20, ON),
    (0xFF3B, 0xFF40, ON),
    (0xFF5B, 0xFF65, ON),
    (0xFF21, 0xFF3A, L),
    (0xFF41, 0xFF5A, L),
    (0xFF66, 0xFFDC, L),
    (0xFFE2, 0xFFE4, ON),
    (0xFFE8, 0xFFEE, ON),
    (0xFFF9, 0xFFFD, ON),
    // -- Supplementary planes --
    (0x10800, 0x10CFF, R),
    (0x10D00, 0x10D3F, AL),
    (0x10D40, 0x10FFF, R),
    (0x1EC70, 0x1ECBF, AL),
    (0x1ED00, 0x1ED4F, AL),
    (0x1EE00, 0x1EEFF, AL),
    (0x1E800, 0x1EFFF, R),
    (0x1F000, 0x1FBFF, ON),
    (0x1D400, 0x1D7FF, L),
    (0x20000, 0x3FFFF, L),
    // -- Remaining scripts of the BMP default to left-to-right. Their
    // combining marks are not distinguished from the base letters.
    (0x0900, 0x1DFF, L),
];
