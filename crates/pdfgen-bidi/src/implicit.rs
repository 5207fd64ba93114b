// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Implicit embedding levels (I1–I2).

use crate::classify::BidiClass::*;
use crate::record::CharRecord;

pub(crate) fn resolve_implicit(records: &mut [CharRecord]) {
    for record in records.iter_mut() {
        let raise = if record.level % 2 == 0 {
            match record.class {
                R => 1,
                AN | EN => 2,
                _ => 0,
            }
        } else {
            match record.class {
                L | AN | EN => 1,
                _ => 0,
            }
        };
        record.level += raise;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::BidiClass;
    use crate::record::records_from_classes;

    fn levels(classes: &[BidiClass], level: u8) -> Vec<u8> {
        let mut records = records_from_classes(classes, level);
        resolve_implicit(&mut records);
        records.iter().map(|r| r.level).collect()
    }

    #[test]
    fn even_level() {
        assert_eq!(levels(&[L, R, AN, EN], 0), vec![0, 1, 2, 2]);
        assert_eq!(levels(&[L, R, EN], 2), vec![2, 3, 4]);
    }

    #[test]
    fn odd_level() {
        assert_eq!(levels(&[L, R, AN, EN], 1), vec![2, 1, 2, 2]);
    }
}
