//! Wire types for the OpenAI chat completions API
//!
//! Request messages are `{role: "user"|"assistant", content}`; the store's
//! roles map one to one.

use crate::providers::HistoryFormatter;
use jarvis_domain::{Role, SessionHistory};
use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice. `None` if there are no choices at all;
    /// a choice with null content yields an empty string.
    pub fn first_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
    }
}

// ─── History formatting ──────────────────────────────────────────

/// Formats history as OpenAI chat messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAiFormatter;

impl OpenAiFormatter {
    fn role(role: Role) -> &'static str {
        match role {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl HistoryFormatter for OpenAiFormatter {
    type Message = ChatMessage;

    fn format_history(&self, history: &SessionHistory) -> Vec<ChatMessage> {
        history
            .iter()
            .map(|turn| ChatMessage {
                role: Self::role(turn.role()),
                content: turn.text().to_string(),
            })
            .collect()
    }
}
