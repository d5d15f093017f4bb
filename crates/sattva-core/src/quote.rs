//! Daily inspirational quote domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A per-calendar-day cached quote.
///
/// A cached quote is valid for reuse only while its `date` equals the
/// current calendar day; any other date forces a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuote {
    pub text: String,
    pub author: String,
    /// The calendar day the quote is valid for.
    pub date: NaiveDate,
}

impl DailyQuote {
    pub fn new(text: impl Into<String>, author: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            date,
        }
    }

    /// True when the cached value may be reused verbatim for `today`.
    pub fn is_fresh(&self, today: NaiveDate) -> bool {
        self.date == today
    }
}
