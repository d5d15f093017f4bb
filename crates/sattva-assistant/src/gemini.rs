//! GeminiClient - direct REST API implementation of the assistant.
//!
//! Calls the Gemini `generateContent` endpoint. Every public operation
//! resolves failures to its fixed fallback value; errors are logged for
//! diagnostics and never propagate past this boundary.

use chrono::Local;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

use crate::fallback;
use crate::prompts::{self, QUOTE_PROMPT, SYSTEM_INSTRUCTION};
use sattva_core::assistant::Assistant;
use sattva_core::chat::{ChatMessage, ChatRole};
use sattva_core::mood::MoodEntry;
use sattva_core::quote::DailyQuote;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const CHAT_TEMPERATURE: f32 = 0.7;
const INSIGHT_TEMPERATURE: f32 = 0.8;

/// Failures internal to the Gemini boundary. Never surfaced to the user;
/// mapped to fallback values and logged.
#[derive(Debug, Error)]
enum GeminiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("service returned {status}: {message}")]
    Service { status: u16, message: String },
    #[error("failed to parse response: {0}")]
    Malformed(String),
    #[error("response contained no text")]
    NoText,
}

/// Assistant implementation that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Creates a new client with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    async fn generate(&self, request: &GenerateContentRequest) -> Result<String, GeminiError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .timeout(REQUEST_TIMEOUT)
            .json(request)
            .send()
            .await
            .map_err(|err| GeminiError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| GeminiError::Malformed(err.to_string()))?;

        extract_text(parsed)
    }

    fn chat_request(history: &[ChatMessage], message: &str) -> GenerateContentRequest {
        let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
        contents.push(Content::user(message));

        GenerateContentRequest {
            contents,
            system_instruction: Some(Content::system(SYSTEM_INSTRUCTION)),
            generation_config: Some(GenerationConfig {
                temperature: Some(CHAT_TEMPERATURE),
                response_mime_type: None,
                response_schema: None,
            }),
        }
    }

    fn quote_request() -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(QUOTE_PROMPT)],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                temperature: None,
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(json!({
                    "type": "OBJECT",
                    "properties": {
                        "text": {"type": "STRING"},
                        "author": {"type": "STRING"}
                    },
                    "required": ["text", "author"]
                })),
            }),
        }
    }

    fn insight_request(entries: &[MoodEntry]) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(prompts::insight_prompt(entries))],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                temperature: Some(INSIGHT_TEMPERATURE),
                response_mime_type: None,
                response_schema: None,
            }),
        }
    }
}

#[async_trait::async_trait]
impl Assistant for GeminiClient {
    async fn chat_reply(&self, history: &[ChatMessage], message: &str) -> String {
        match self.generate(&Self::chat_request(history, message)).await {
            Ok(text) => text,
            Err(GeminiError::NoText) => fallback::CHAT_NO_TEXT.to_string(),
            Err(err) => {
                tracing::warn!(%err, "chat call failed; using fallback reply");
                fallback::CHAT_FAILURE.to_string()
            }
        }
    }

    async fn daily_quote(&self) -> DailyQuote {
        let today = Local::now().date_naive();

        match self.generate(&Self::quote_request()).await {
            Ok(text) => {
                // The structured call answers with a JSON object; missing
                // fields degrade per-field rather than failing the quote.
                let parsed: QuotePayload = serde_json::from_str(&text).unwrap_or_default();
                DailyQuote::new(
                    parsed
                        .text
                        .unwrap_or_else(|| fallback::QUOTE_NO_TEXT.to_string()),
                    parsed
                        .author
                        .unwrap_or_else(|| fallback::QUOTE_NO_AUTHOR.to_string()),
                    today,
                )
            }
            Err(err) => {
                tracing::warn!(%err, "quote call failed; using fallback quote");
                DailyQuote::new(
                    fallback::QUOTE_FAILURE_TEXT,
                    fallback::QUOTE_FAILURE_AUTHOR,
                    today,
                )
            }
        }
    }

    async fn mood_insight(&self, entries: &[MoodEntry]) -> String {
        if entries.is_empty() {
            return fallback::INSIGHT_NO_ENTRIES.to_string();
        }

        match self.generate(&Self::insight_request(entries)).await {
            Ok(text) => text,
            Err(GeminiError::NoText) => fallback::INSIGHT_NO_TEXT.to_string(),
            Err(err) => {
                tracing::warn!(%err, "insight call failed; using fallback insight");
                fallback::INSIGHT_FAILURE.to_string()
            }
        }
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

impl Content {
    fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }

    fn system(text: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

impl From<&ChatMessage> for Content {
    fn from(message: &ChatMessage) -> Self {
        // The wire protocol calls the assistant role "model".
        let role = match message.role {
            ChatRole::User => "user",
            ChatRole::Assistant => "model",
        };
        Self {
            role: role.to_string(),
            parts: vec![Part {
                text: message.text.clone(),
            }],
        }
    }
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize, Default)]
struct QuotePayload {
    text: Option<String>,
    author: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text(response: GenerateContentResponse) -> Result<String, GeminiError> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or(GeminiError::NoText)
}

fn map_http_error(status: StatusCode, body: String) -> GeminiError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or(body);

    GeminiError::Service {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_maps_roles_and_appends_message() {
        let history = vec![
            ChatMessage::assistant("Hello!"),
            ChatMessage::user("I'm tired."),
        ];
        let request = GeminiClient::chat_request(&history, "Help me sleep");

        assert_eq!(request.contents.len(), 3);
        assert_eq!(request.contents[0].role, "model");
        assert_eq!(request.contents[1].role, "user");
        assert_eq!(request.contents[2].role, "user");
        assert_eq!(request.contents[2].parts[0].text, "Help me sleep");
        assert!(request.system_instruction.is_some());
    }

    #[test]
    fn test_quote_request_asks_for_structured_json() {
        let request = GeminiClient::quote_request();
        let config = request.generation_config.unwrap();
        assert_eq!(config.response_mime_type.as_deref(), Some("application/json"));
        assert!(config.response_schema.is_some());
    }

    #[test]
    fn test_extract_text_takes_first_text_part() {
        let response = GenerateContentResponse {
            candidates: Some(vec![Candidate {
                content: Some(ContentResponse {
                    parts: vec![
                        PartResponse { text: None },
                        PartResponse {
                            text: Some("calm".to_string()),
                        },
                    ],
                }),
            }]),
        };
        assert_eq!(extract_text(response).unwrap(), "calm");
    }

    #[test]
    fn test_extract_text_without_candidates_is_no_text() {
        let response = GenerateContentResponse { candidates: None };
        assert!(matches!(extract_text(response), Err(GeminiError::NoText)));
    }

    #[test]
    fn test_http_error_uses_structured_body_when_present() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error": {"message": "quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#
                .to_string(),
        );
        let text = err.to_string();
        assert!(text.contains("429"));
        assert!(text.contains("RESOURCE_EXHAUSTED: quota exceeded"));
    }
}
