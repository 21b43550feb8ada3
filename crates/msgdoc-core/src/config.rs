// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Adapter configuration.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Settings for an [`Adapter`](crate::Adapter).
///
/// Missing keys take their defaults; unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterConfig {
    /// Namespace shared by the root element and every field element.
    pub namespace: String,
    /// Log each built document as XML at trace level.
    pub trace_documents: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            trace_documents: true,
        }
    }
}

impl AdapterConfig {
    /// Parse a JSON config.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> Result<Vec<u8>, ConfigError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Load a JSON config file. Returns `Ok(None)` if the file is missing or empty.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(ConfigError::Io(err)),
        };
        if bytes.is_empty() {
            return Ok(None);
        }
        Self::from_json_slice(&bytes).map(Some)
    }
}
