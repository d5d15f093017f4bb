//! Assistant service boundary.
//!
//! The hosted text-generation service is consumed behind this trait. The
//! surface is deliberately infallible: every implementation resolves
//! failures (timeout, transport error, malformed response) to a fixed
//! fallback value and logs the cause for diagnostics. There is no retry
//! policy; a failed call falls back immediately.

use crate::chat::ChatMessage;
use crate::mood::MoodEntry;
use crate::quote::DailyQuote;

/// A request/response text-generation companion.
#[async_trait::async_trait]
pub trait Assistant: Send + Sync {
    /// A conversational reply given the prior transcript and the new
    /// user message.
    async fn chat_reply(&self, history: &[ChatMessage], message: &str) -> String;

    /// A structured quote for the current calendar day.
    async fn daily_quote(&self) -> DailyQuote;

    /// A short empathetic insight over recent mood entries. With no
    /// entries an onboarding string is returned without any remote call.
    async fn mood_insight(&self, entries: &[MoodEntry]) -> String;
}
