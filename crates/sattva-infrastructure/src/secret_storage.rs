//! Secret configuration file storage.
//!
//! Read-only loading of `~/.config/sattva/secret.json`. A missing file
//! simply means no key is configured; the assistant then runs in its
//! offline fallback mode. Error messages never contain secret values.

use crate::paths::SattvaPaths;
use sattva_core::secret::SecretConfig;
use sattva_core::{Result, SattvaError};
use std::fs;
use std::path::Path;

/// Loads secrets from the default path.
pub fn load_secrets() -> Result<SecretConfig> {
    load_secrets_from(&SattvaPaths::secret_file()?)
}

/// Loads secrets from an explicit path.
pub fn load_secrets_from(path: &Path) -> Result<SecretConfig> {
    if !path.exists() {
        return Ok(SecretConfig::default());
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        SattvaError::config(format!(
            "Failed to parse secret file at {}: {}",
            path.display(),
            e
        ))
    })
}
