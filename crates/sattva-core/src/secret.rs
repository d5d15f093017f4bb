//! Secret configuration (API keys).
//!
//! Loaded read-only from `~/.config/sattva/secret.json`. Secrets are
//! never logged and never appear in error messages.

use serde::{Deserialize, Serialize};

/// Root of secret.json.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiSecret>,
}

/// Gemini API credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiSecret {
    pub api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_secret_json() {
        let config: SecretConfig =
            serde_json::from_str(r#"{"gemini": {"api_key": "k"}}"#).unwrap();
        assert_eq!(config.gemini.unwrap().api_key, "k");
    }

    #[test]
    fn test_empty_object_has_no_key() {
        let config: SecretConfig = serde_json::from_str("{}").unwrap();
        assert!(config.gemini.is_none());
    }
}
