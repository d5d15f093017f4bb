//! Unified path management for Sattva files.
//!
//! All configuration, secrets, and store data live under the platform
//! config/data directories:
//!
//! ```text
//! ~/.config/sattva/            # Config directory
//! ├── config.toml              # Application configuration
//! └── secret.json              # API keys
//!
//! ~/.local/share/sattva/       # Data directory
//! └── store/                   # JSON key-value store
//!     ├── users.json
//!     ├── session.json
//!     ├── moods.json
//!     └── daily_quote.json
//! ```

use sattva_core::{Result, SattvaError};
use std::path::PathBuf;

/// Unified path resolution for Sattva.
pub struct SattvaPaths;

impl SattvaPaths {
    /// The Sattva configuration directory, e.g. `~/.config/sattva/`.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("sattva"))
            .ok_or_else(|| SattvaError::config("Cannot find config directory"))
    }

    /// The Sattva data directory, e.g. `~/.local/share/sattva/`.
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("sattva"))
            .ok_or_else(|| SattvaError::config("Cannot find data directory"))
    }

    /// Directory holding the JSON key-value store.
    pub fn store_dir() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("store"))
    }

    /// Path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Path to the secret file.
    pub fn secret_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("secret.json"))
    }
}
