// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Display engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PdfgenError, Result};
use crate::types::BaseDirection;

/// Persistent display settings.
///
/// The defaults reproduce the plain reordering pipeline exactly: automatic
/// paragraph direction and mirroring enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidiConfig {
    /// Paragraph direction; `Auto` scans for the first strong character.
    pub base_direction: BaseDirection,
    /// Substitute mirrored glyphs on right-to-left levels.
    pub mirror_glyphs: bool,
    /// Encoding label used for byte input and output.
    pub default_encoding: String,
    /// Maximum characters per wrapped line for right-to-left titles.
    pub wrap_width: Option<usize>,
}

impl Default for BidiConfig {
    fn default() -> Self {
        Self {
            base_direction: BaseDirection::Auto,
            mirror_glyphs: true,
            default_encoding: "utf-8".into(),
            wrap_width: None,
        }
    }
}

impl BidiConfig {
    /// Load a config from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        debug!(path = %path.as_ref().display(), ?config, "loaded display config");
        Ok(config)
    }

    /// Persist the config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Reject values the pipeline cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.default_encoding.trim().is_empty() {
            return Err(PdfgenError::InvalidConfig(
                "default_encoding must not be empty".into(),
            ));
        }
        if self.wrap_width == Some(0) {
            return Err(PdfgenError::InvalidConfig(
                "wrap_width must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
