//! Offline assistant used when no API key is configured.
//!
//! Answers every request from the fixed fallback values so the rest of
//! the application behaves exactly as it does when a remote call fails.

use chrono::Local;

use crate::fallback;
use sattva_core::assistant::Assistant;
use sattva_core::chat::ChatMessage;
use sattva_core::mood::MoodEntry;
use sattva_core::quote::DailyQuote;

/// Keyless assistant. Stateless and instant.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAssistant;

#[async_trait::async_trait]
impl Assistant for StaticAssistant {
    async fn chat_reply(&self, _history: &[ChatMessage], _message: &str) -> String {
        fallback::CHAT_NO_TEXT.to_string()
    }

    async fn daily_quote(&self) -> DailyQuote {
        DailyQuote::new(
            fallback::QUOTE_FAILURE_TEXT,
            fallback::QUOTE_FAILURE_AUTHOR,
            Local::now().date_naive(),
        )
    }

    async fn mood_insight(&self, entries: &[MoodEntry]) -> String {
        if entries.is_empty() {
            fallback::INSIGHT_NO_ENTRIES.to_string()
        } else {
            fallback::INSIGHT_FAILURE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sattva_core::mood::Mood;

    #[tokio::test]
    async fn test_quote_is_stamped_with_today() {
        let quote = StaticAssistant.daily_quote().await;
        assert!(quote.is_fresh(Local::now().date_naive()));
        assert_eq!(quote.author, fallback::QUOTE_FAILURE_AUTHOR);
    }

    #[tokio::test]
    async fn test_insight_onboarding_without_entries() {
        assert_eq!(
            StaticAssistant.mood_insight(&[]).await,
            fallback::INSIGHT_NO_ENTRIES
        );

        let entries = [MoodEntry::at(0, Mood::Good, 2, "")];
        assert_eq!(
            StaticAssistant.mood_insight(&entries).await,
            fallback::INSIGHT_FAILURE
        );
    }
}
