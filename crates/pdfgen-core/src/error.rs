// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for PdfGen.

use thiserror::Error;

/// Top-level error type for all PdfGen operations.
///
/// The bidi pipeline itself is total over well-formed text; only the edges
/// (byte decoding, configuration, file I/O) can fail.
#[derive(Debug, Error)]
pub enum PdfgenError {
    // -- Encoding errors --
    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("input is not valid {encoding}: {detail}")]
    Decode { encoding: String, detail: String },

    #[error("display text cannot be encoded as {encoding}: {detail}")]
    Encode { encoding: String, detail: String },

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PdfgenError {
    /// Whether this error came from decoding or encoding byte input/output.
    pub fn is_encoding(&self) -> bool {
        matches!(
            self,
            Self::UnknownEncoding(_) | Self::Decode { .. } | Self::Encode { .. }
        )
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PdfgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_variants_are_flagged() {
        assert!(PdfgenError::UnknownEncoding("klingon".into()).is_encoding());
        assert!(
            PdfgenError::Decode {
                encoding: "UTF-8".into(),
                detail: "bad byte".into(),
            }
            .is_encoding()
        );
        assert!(!PdfgenError::InvalidConfig("x".into()).is_encoding());
    }

    #[test]
    fn display_includes_encoding_name() {
        let err = PdfgenError::Encode {
            encoding: "windows-1255".into(),
            detail: "U+0627 is unmappable".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("windows-1255"));
        assert!(msg.contains("U+0627"));
    }
}
