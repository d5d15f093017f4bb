//! JSON-store-backed daily-quote cache.

use crate::dto::quote::{DailyQuoteV1, daily_quote_chain};
use crate::envelope::{load_envelope, save_envelope};
use crate::migration::MigrationChain;
use crate::store::{JsonStore, keys};
use sattva_core::Result;
use sattva_core::quote::DailyQuote;
use sattva_core::repository::QuoteRepository;

/// Stores the cached quote under the `daily_quote` key.
#[derive(Debug)]
pub struct JsonQuoteRepository {
    store: JsonStore,
    chain: MigrationChain,
}

impl JsonQuoteRepository {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            chain: daily_quote_chain(),
        }
    }
}

impl QuoteRepository for JsonQuoteRepository {
    fn load(&self) -> Result<Option<DailyQuote>> {
        let dto: Option<DailyQuoteV1> = load_envelope(&self.store, keys::DAILY_QUOTE, &self.chain)?;
        Ok(dto.map(DailyQuoteV1::into_domain))
    }

    fn save(&self, quote: &DailyQuote) -> Result<()> {
        save_envelope(&self.store, keys::DAILY_QUOTE, &DailyQuoteV1::from(quote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let repo = JsonQuoteRepository::new(JsonStore::new(dir.path().to_path_buf()));

        assert!(repo.load().unwrap().is_none());

        let quote = DailyQuote::new(
            "Peace comes from within.",
            "Buddha",
            NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
        );
        repo.save(&quote).unwrap();
        assert_eq!(repo.load().unwrap().unwrap(), quote);
    }
}
