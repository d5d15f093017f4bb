//! Ephemeral chat transcript with single-flight send discipline.
//!
//! Messages live in memory for the duration of one chat view session and
//! are never persisted. While a request is outstanding the transcript is
//! `pending`; further sends are dropped, not queued.

use serde::{Deserialize, Serialize};

/// Opening message shown before the user has said anything.
pub const GREETING: &str = "Hello! I'm your AI Buddy. I'm here to listen, offer support, and help you find calm. How's everything going?";

/// Quick prompts offered in the chat view.
pub const SUGGESTIONS: [&str; 4] = [
    "I'm feeling anxious",
    "Help me sleep",
    "I need to vent",
    "Good news!",
];

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One chat message. In-memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// A dispatched exchange: the conversation as it stood before the new
/// message, plus the message itself. This is exactly what the assistant
/// request needs.
#[derive(Debug, Clone)]
pub struct OutboundChat {
    pub history: Vec<ChatMessage>,
    pub message: String,
}

/// Chat view state: the transcript plus the single pending flag.
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl ChatTranscript {
    /// Fresh transcript, seeded with the assistant greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            pending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a request is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Begins a send, applying the single-flight discipline.
    ///
    /// Returns `None` (send dropped) when a request is already pending or
    /// the input is blank. Otherwise appends the user message, marks the
    /// transcript pending, and returns the outbound exchange with the
    /// pre-send history snapshot.
    pub fn begin_send(&mut self, text: &str) -> Option<OutboundChat> {
        let text = text.trim();
        if self.pending || text.is_empty() {
            return None;
        }
        let history = self.messages.clone();
        self.messages.push(ChatMessage::user(text));
        self.pending = true;
        Some(OutboundChat {
            history,
            message: text.to_string(),
        })
    }

    /// Resolves the pending exchange with the assistant reply.
    pub fn push_reply(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(text));
        self.pending = false;
    }
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_opens_with_greeting() {
        let transcript = ChatTranscript::new();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].role, ChatRole::Assistant);
        assert_eq!(transcript.messages()[0].text, GREETING);
        assert!(!transcript.is_pending());
    }

    #[test]
    fn test_begin_send_snapshots_history_before_message() {
        let mut transcript = ChatTranscript::new();
        let outbound = transcript.begin_send("I'm feeling anxious").unwrap();
        // The snapshot excludes the message being sent.
        assert_eq!(outbound.history.len(), 1);
        assert_eq!(outbound.message, "I'm feeling anxious");
        // The transcript includes it.
        assert_eq!(transcript.messages().len(), 2);
        assert!(transcript.is_pending());
    }

    #[test]
    fn test_second_send_while_pending_is_dropped() {
        let mut transcript = ChatTranscript::new();
        assert!(transcript.begin_send("first").is_some());
        let len = transcript.messages().len();

        assert!(transcript.begin_send("second").is_none());
        // Dropped, not queued: no user message appended.
        assert_eq!(transcript.messages().len(), len);
        assert!(transcript.is_pending());
    }

    #[test]
    fn test_blank_input_is_dropped() {
        let mut transcript = ChatTranscript::new();
        assert!(transcript.begin_send("   ").is_none());
        assert!(!transcript.is_pending());
    }

    #[test]
    fn test_reply_clears_pending_and_allows_next_send() {
        let mut transcript = ChatTranscript::new();
        transcript.begin_send("hello").unwrap();
        transcript.push_reply("I'm listening.");
        assert!(!transcript.is_pending());
        assert_eq!(transcript.messages().len(), 3);

        let outbound = transcript.begin_send("more").unwrap();
        // History now carries the full first exchange.
        assert_eq!(outbound.history.len(), 3);
    }
}
