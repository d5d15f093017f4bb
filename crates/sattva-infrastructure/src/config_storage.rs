//! Application configuration file storage.
//!
//! Reads `~/.config/sattva/config.toml`. A missing file yields the
//! defaults; a present but malformed file is a configuration error the
//! user should see, not something to paper over.

use crate::paths::SattvaPaths;
use sattva_core::config::AppConfig;
use sattva_core::{Result, SattvaError};
use std::fs;
use std::path::Path;

/// Loads the configuration from the default path.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&SattvaPaths::config_file()?)
}

/// Loads the configuration from an explicit path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }

    toml::from_str(&content).map_err(|e| {
        SattvaError::config(format!(
            "Failed to parse config file at {}: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_parse_failure_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "assistant = nonsense").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, SattvaError::Config(_)));
    }

    #[test]
    fn test_model_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[assistant]\nmodel = \"gemini-2.5-pro\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.assistant.model, "gemini-2.5-pro");
    }
}
