//! Fixed fallback values for the assistant boundary.
//!
//! Every external call degrades to one of these on any failure; none of
//! them is ever surfaced as a hard error to the user.

/// Chat reply when the service call fails outright.
pub const CHAT_FAILURE: &str =
    "I apologize, I've encountered a small technical glitch. I'm still here to listen.";

/// Chat reply when the service answers without any text.
pub const CHAT_NO_TEXT: &str = "I'm here for you. Could you tell me more?";

/// Quote used when the structured quote call fails.
pub const QUOTE_FAILURE_TEXT: &str = "Nature does not hurry, yet everything is accomplished.";
pub const QUOTE_FAILURE_AUTHOR: &str = "Lao Tzu";

/// Quote fields used when the service answers with incomplete JSON.
pub const QUOTE_NO_TEXT: &str =
    "Peace is a journey of a thousand miles and it must be taken one step at a time.";
pub const QUOTE_NO_AUTHOR: &str = "Ancient Wisdom";

/// Insight shown before any mood has been logged. Returned without a
/// remote call.
pub const INSIGHT_NO_ENTRIES: &str =
    "Start logging your mood to receive personalized AI insights.";

/// Insight when the service answers without any text.
pub const INSIGHT_NO_TEXT: &str =
    "You're doing a great job checking in with yourself. Keep it up!";

/// Insight when the service call fails outright.
pub const INSIGHT_FAILURE: &str =
    "Reflecting on your journey is a powerful step. You're making progress!";
