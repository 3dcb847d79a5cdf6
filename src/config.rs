// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Session configuration loaded from TOML.
// Author: Lukas Bower

//! Device session configuration.
//!
//! ```toml
//! capabilities = "DVB_T | DVB_T2 | DVB_C"
//! write_mode = "on_change"
//! field_width = "truncate"
//! download = "best_effort"
//! text_separator = " "
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::caps::Capabilities;
use crate::registry::Registry;
use crate::types::{DownloadPolicy, FieldWidthPolicy, WriteMode};

/// Errors produced while loading a [`SessionConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("reading {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The document is not a valid session configuration.
    #[error("parsing session config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Per-session policies and the capability set the registry is built from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Standards supported by the front-end; the registry is built from it.
    pub capabilities: Capabilities,
    /// Whether unchanged values are downloaded again.
    pub write_mode: WriteMode,
    /// Treatment of values that do not fit the property fields.
    pub field_width: FieldWidthPolicy,
    /// Behaviour of bulk downloads on transport failure.
    pub download: DownloadPolicy,
    /// Separator between tokens of rendered property text.
    pub text_separator: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capabilities: Capabilities::all(),
            write_mode: WriteMode::OnChange,
            field_width: FieldWidthPolicy::Truncate,
            download: DownloadPolicy::BestEffort,
            text_separator: " ".into(),
        }
    }
}

impl SessionConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Registry admitted by the configured capabilities.
    #[must_use]
    pub fn registry(&self) -> Registry {
        Registry::new(self.capabilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = SessionConfig::from_toml_str("").expect("parse");
        assert_eq!(cfg, SessionConfig::default());
    }

    #[test]
    fn policies_and_capabilities_parse() {
        let cfg = SessionConfig::from_toml_str(
            "capabilities = \"DVB_T | DVB_C\"\nwrite_mode = \"always\"\nfield_width = \"reject\"\ndownload = \"stop_on_failure\"\n",
        )
        .expect("parse");
        assert_eq!(cfg.capabilities, Capabilities::DVB_T | Capabilities::DVB_C);
        assert_eq!(cfg.write_mode, WriteMode::Always);
        assert_eq!(cfg.field_width, FieldWidthPolicy::Reject);
        assert_eq!(cfg.download, DownloadPolicy::StopOnFailure);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = SessionConfig::from_toml_str("verbose = true").expect_err("unknown key");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
