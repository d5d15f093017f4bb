//! Application configuration domain models.
//!
//! Loaded from `~/.config/sattva/config.toml` by the infrastructure
//! crate; every field has a default so a missing file is fine.

use serde::{Deserialize, Serialize};

/// Root of config.toml.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub assistant: AssistantSettings,
    #[serde(default)]
    pub log: LogSettings,
}

/// Assistant model selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantSettings {
    /// Gemini model name used for all generation calls.
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Tracing filter directive, e.g. "warn" or "sattva=debug".
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.assistant.model, "gemini-2.5-flash");
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: AppConfig = toml::from_str("[assistant]\nmodel = \"gemini-2.5-pro\"\n").unwrap();
        assert_eq!(config.assistant.model, "gemini-2.5-pro");
        assert_eq!(config.log.level, "warn");
    }
}
