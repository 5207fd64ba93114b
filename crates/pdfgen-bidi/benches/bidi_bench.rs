// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the pdfgen-bidi pipeline. Covers an ordinary mixed
// Hebrew/Latin/digit paragraph and the deep-nesting worst case.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use pdfgen_bidi::{NoShaping, reorder_for_display, wrap_rtl_line};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// A table-of-contents sized paragraph repeated over several lines.
fn bench_mixed_paragraph(c: &mut Criterion) {
    let line = "נספח 12: חוזה שכירות (Lease Agreement) מיום 01/02/2024, עמ' 37";
    let text = vec![line; 40].join("\n");

    c.bench_function("reorder_for_display (mixed, 40 lines)", |b| {
        b.iter(|| black_box(reorder_for_display(black_box(&text))));
    });
}

/// More embedding pushes than the stack holds, so every extra push is
/// dropped and every record sits near the level cap.
fn bench_deep_nesting(c: &mut Criterion) {
    let text = format!("{}abc אבג 123{}", "\u{202B}\u{202A}".repeat(64), "\u{202C}".repeat(128));

    c.bench_function("reorder_for_display (deep nesting)", |b| {
        b.iter(|| black_box(reorder_for_display(black_box(&text))));
    });
}

fn bench_title_wrap(c: &mut Criterion) {
    let title = "כתב תביעה בעניין הפרת הסכם שכירות ודרישה לפינוי המושכר";

    c.bench_function("wrap_rtl_line (title width)", |b| {
        b.iter(|| black_box(wrap_rtl_line(black_box(title), 27, &NoShaping)));
    });
}

criterion_group!(
    benches,
    bench_mixed_paragraph,
    bench_deep_nesting,
    bench_title_wrap
);
criterion_main!(benches);
