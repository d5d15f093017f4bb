//! Home dashboard use-cases: the daily quote cache and mood insights.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use sattva_core::Result;
use sattva_core::assistant::Assistant;
use sattva_core::mood::MoodEntry;
use sattva_core::quote::DailyQuote;
use sattva_core::repository::QuoteRepository;

/// Daily quote caching and assistant-generated insight.
pub struct DashboardService {
    quotes: Arc<dyn QuoteRepository>,
    assistant: Arc<dyn Assistant>,
}

impl DashboardService {
    pub fn new(quotes: Arc<dyn QuoteRepository>, assistant: Arc<dyn Assistant>) -> Self {
        Self { quotes, assistant }
    }

    /// The quote for today.
    ///
    /// A cached quote dated today is reused verbatim without any
    /// assistant call; anything else triggers exactly one refresh, which
    /// is cached write-through.
    pub async fn daily_quote(&self) -> Result<DailyQuote> {
        self.quote_for(Local::now().date_naive()).await
    }

    async fn quote_for(&self, today: NaiveDate) -> Result<DailyQuote> {
        if let Some(cached) = self.quotes.load()? {
            if cached.is_fresh(today) {
                return Ok(cached);
            }
            tracing::debug!(cached_day = %cached.date, "cached quote is stale; refreshing");
        }

        let fresh = self.assistant.daily_quote().await;
        self.quotes.save(&fresh)?;
        Ok(fresh)
    }

    /// A short empathetic insight over the given entries.
    pub async fn insight(&self, entries: &[MoodEntry]) -> String {
        self.assistant.mood_insight(entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sattva_core::chat::ChatMessage;
    use sattva_infrastructure::{JsonQuoteRepository, JsonStore};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// Stub assistant that counts remote quote calls.
    #[derive(Default)]
    struct CountingAssistant {
        quote_calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Assistant for CountingAssistant {
        async fn chat_reply(&self, _history: &[ChatMessage], _message: &str) -> String {
            "reply".to_string()
        }

        async fn daily_quote(&self) -> DailyQuote {
            self.quote_calls.fetch_add(1, Ordering::SeqCst);
            DailyQuote::new("fresh words", "Stub", Local::now().date_naive())
        }

        async fn mood_insight(&self, _entries: &[MoodEntry]) -> String {
            "insight".to_string()
        }
    }

    fn service() -> (TempDir, Arc<CountingAssistant>, DashboardService) {
        let dir = TempDir::new().unwrap();
        let quotes = Arc::new(JsonQuoteRepository::new(JsonStore::new(
            dir.path().to_path_buf(),
        )));
        let assistant = Arc::new(CountingAssistant::default());
        let dashboard = DashboardService::new(quotes, Arc::clone(&assistant) as Arc<dyn Assistant>);
        (dir, assistant, dashboard)
    }

    #[tokio::test]
    async fn test_fresh_cache_is_reused_without_a_call() {
        let (_dir, assistant, dashboard) = service();
        let today = Local::now().date_naive();

        let cached = DailyQuote::new("cached words", "Cache", today);
        dashboard.quotes.save(&cached).unwrap();

        let quote = dashboard.quote_for(today).await.unwrap();
        assert_eq!(quote, cached);
        assert_eq!(assistant.quote_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_stale_cache_triggers_exactly_one_refresh() {
        let (_dir, assistant, dashboard) = service();
        let today = Local::now().date_naive();
        let yesterday = today.pred_opt().unwrap();

        dashboard
            .quotes
            .save(&DailyQuote::new("old words", "Cache", yesterday))
            .unwrap();

        let quote = dashboard.quote_for(today).await.unwrap();
        assert_eq!(quote.text, "fresh words");
        assert_eq!(assistant.quote_calls.load(Ordering::SeqCst), 1);

        // The refreshed quote was cached write-through: asking again
        // today costs no further call.
        let again = dashboard.quote_for(today).await.unwrap();
        assert_eq!(again, quote);
        assert_eq!(assistant.quote_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_cache_fetches_once() {
        let (_dir, assistant, dashboard) = service();
        let today = Local::now().date_naive();

        dashboard.quote_for(today).await.unwrap();
        assert_eq!(assistant.quote_calls.load(Ordering::SeqCst), 1);
    }
}
