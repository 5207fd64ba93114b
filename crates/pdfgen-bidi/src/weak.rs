// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Weak type resolution (W1–W7), one left-to-right pass per rule.
//
// The whole sequence is a single run whose sor is `L`.

use crate::classify::BidiClass::*;
use crate::record::CharRecord;

pub(crate) fn resolve_weak(records: &mut [CharRecord]) {
    nsm_takes_previous(records);
    european_after_arabic(records);
    arabic_letters_to_r(records);
    single_separators(records);
    terminators_adjacent_to_numbers(records);
    remaining_separators_to_on(records);
    european_after_l(records);
}

/// W1
fn nsm_takes_previous(records: &mut [CharRecord]) {
    let mut prev = L;
    for record in records.iter_mut() {
        if record.class == NSM {
            record.class = prev;
        }
        prev = record.class;
    }
}

/// W2
fn european_after_arabic(records: &mut [CharRecord]) {
    let mut last_strong = L;
    for record in records.iter_mut() {
        if record.class == EN && last_strong == AL {
            record.class = AN;
        }
        if record.class.is_strong() {
            last_strong = record.class;
        }
    }
}

/// W3
fn arabic_letters_to_r(records: &mut [CharRecord]) {
    for record in records.iter_mut().filter(|r| r.class == AL) {
        record.class = R;
    }
}

/// W4
fn single_separators(records: &mut [CharRecord]) {
    for i in 1..records.len().saturating_sub(1) {
        let (prev, next) = (records[i - 1].class, records[i + 1].class);
        match records[i].class {
            ES if prev == EN && next == EN => records[i].class = EN,
            CS if prev == next && matches!(prev, AN | EN) => records[i].class = prev,
            _ => {}
        }
    }
}

/// W5
fn terminators_adjacent_to_numbers(records: &mut [CharRecord]) {
    for i in 0..records.len() {
        if records[i].class != EN {
            continue;
        }
        for record in records[..i].iter_mut().rev() {
            if record.class != ET {
                break;
            }
            record.class = EN;
        }
        for record in records[i + 1..].iter_mut() {
            if record.class != ET {
                break;
            }
            record.class = EN;
        }
    }
}

/// W6
fn remaining_separators_to_on(records: &mut [CharRecord]) {
    for record in records
        .iter_mut()
        .filter(|r| matches!(r.class, ET | ES | CS))
    {
        record.class = ON;
    }
}

/// W7
fn european_after_l(records: &mut [CharRecord]) {
    let mut last_strong = L;
    for record in records.iter_mut() {
        if record.class == EN && last_strong == L {
            record.class = L;
        }
        if matches!(record.class, L | R) {
            last_strong = record.class;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::BidiClass;
    use crate::record::records_from_classes;

    fn resolved(classes: &[BidiClass]) -> Vec<BidiClass> {
        let mut records = records_from_classes(classes, 0);
        resolve_weak(&mut records);
        records.iter().map(|r| r.class).collect()
    }

    #[test]
    fn nsm_copies_previous_type() {
        assert_eq!(resolved(&[R, NSM, NSM]), vec![R, R, R]);
        // At the start of the run it takes sor.
        assert_eq!(resolved(&[NSM, R]), vec![L, R]);
    }

    #[test]
    fn numbers_after_arabic_letters_become_arabic() {
        assert_eq!(resolved(&[AL, EN, EN]), vec![R, AN, AN]);
        assert_eq!(resolved(&[AL, WS, EN]), vec![R, WS, AN]);
        assert_eq!(resolved(&[AL, R, EN]), vec![R, R, EN]);
    }

    #[test]
    fn single_separator_between_numbers() {
        assert_eq!(resolved(&[R, EN, ES, EN]), vec![R, EN, EN, EN]);
        assert_eq!(resolved(&[R, EN, CS, EN]), vec![R, EN, EN, EN]);
        assert_eq!(resolved(&[AN, CS, AN]), vec![AN, AN, AN]);
        // ES between Arabic numbers is not joined.
        assert_eq!(resolved(&[AN, ES, AN]), vec![AN, ON, AN]);
        // Two separators in a row are not single.
        assert_eq!(resolved(&[R, EN, CS, CS, EN]), vec![R, EN, ON, ON, EN]);
    }

    #[test]
    fn terminators_join_adjacent_numbers() {
        assert_eq!(resolved(&[R, ET, ET, EN]), vec![R, EN, EN, EN]);
        assert_eq!(resolved(&[R, EN, ET, ET]), vec![R, EN, EN, EN]);
        assert_eq!(resolved(&[R, ET, WS, EN]), vec![R, ON, WS, EN]);
        assert_eq!(resolved(&[AL, ET, EN]), vec![R, ON, AN]);
    }

    #[test]
    fn numbers_after_l_become_l() {
        assert_eq!(resolved(&[L, WS, EN]), vec![L, WS, L]);
        // sor counts as L.
        assert_eq!(resolved(&[EN, R, EN]), vec![L, R, EN]);
        assert_eq!(resolved(&[R, EN, L, EN]), vec![R, EN, L, L]);
    }
}
