pub mod fallback;
pub mod gemini;
pub mod offline;
pub mod prompts;

pub use crate::gemini::GeminiClient;
pub use crate::offline::StaticAssistant;

use std::sync::Arc;

use sattva_core::assistant::Assistant;
use sattva_core::config::AppConfig;
use sattva_core::secret::SecretConfig;

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Builds the assistant from configuration and secrets.
///
/// Key resolution order: `GEMINI_API_KEY` environment variable, then
/// secret.json. Without a key the application degrades to the offline
/// fallback assistant instead of failing.
pub fn build_assistant(config: &AppConfig, secrets: &SecretConfig) -> Arc<dyn Assistant> {
    let api_key = std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| secrets.gemini.as_ref().map(|g| g.api_key.clone()));

    match api_key {
        Some(key) => Arc::new(GeminiClient::new(key, config.assistant.model.clone())),
        None => {
            tracing::info!("no Gemini API key configured; assistant runs offline");
            Arc::new(StaticAssistant)
        }
    }
}
