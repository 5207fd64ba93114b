// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the PdfGen display engine.

use serde::{Deserialize, Serialize};

/// Paragraph base direction hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseDirection {
    /// Detect from the first strong character (falls back to left-to-right).
    #[default]
    Auto,
    /// Force paragraph level 0.
    Ltr,
    /// Force paragraph level 1.
    Rtl,
}

impl BaseDirection {
    /// Paragraph embedding level this hint forces, or `None` for `Auto`.
    pub fn forced_level(&self) -> Option<u8> {
        match self {
            Self::Auto => None,
            Self::Ltr => Some(0),
            Self::Rtl => Some(1),
        }
    }
}

/// Effective text direction derived from the parity of an embedding level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Even levels are left-to-right, odd levels right-to-left.
    pub fn of_level(level: u8) -> Self {
        if level % 2 == 0 { Self::Ltr } else { Self::Rtl }
    }
}
