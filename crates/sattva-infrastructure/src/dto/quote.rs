//! Cached daily quote DTO.

use crate::migration::MigrationChain;
use chrono::NaiveDate;
use semver::Version;
use serde::{Deserialize, Serialize};

use sattva_core::quote::DailyQuote;

/// Latest daily-quote schema version.
pub const DAILY_QUOTE_VERSION: &str = "1.0.0";

/// Cached quote envelope V1.0.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyQuoteV1 {
    pub schema_version: String,
    pub text: String,
    pub author: String,
    /// The calendar day the quote is valid for (ISO date).
    pub date: NaiveDate,
}

impl From<&DailyQuote> for DailyQuoteV1 {
    fn from(quote: &DailyQuote) -> Self {
        Self {
            schema_version: DAILY_QUOTE_VERSION.to_string(),
            text: quote.text.clone(),
            author: quote.author.clone(),
            date: quote.date,
        }
    }
}

impl DailyQuoteV1 {
    pub fn into_domain(self) -> DailyQuote {
        DailyQuote {
            text: self.text,
            author: self.author,
            date: self.date,
        }
    }
}

/// The migration chain for the cached quote.
pub fn daily_quote_chain() -> MigrationChain {
    MigrationChain::new("daily_quote", Version::new(1, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let quote = DailyQuote::new(
            "Nature does not hurry, yet everything is accomplished.",
            "Lao Tzu",
            NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
        );
        let dto = DailyQuoteV1::from(&quote);
        assert_eq!(dto.schema_version, DAILY_QUOTE_VERSION);
        assert_eq!(dto.into_domain(), quote);
    }
}
