//! Wire types for the Gemini `generateContent` API
//!
//! Contents are `{role: "user"|"model", parts: [{text}]}`. The store's
//! `assistant` role is renamed to `model`.

use crate::providers::HistoryFormatter;
use jarvis_domain::{Role, SessionHistory};
use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    pub role: &'static str,
    pub parts: Vec<Part>,
}

/// Server-side tool declaration. Only Google Search grounding is used.
#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GoogleSearch {}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default, rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PromptFeedback {
    #[serde(default, rename = "blockReason")]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    ///
    /// Grounded answers may split text over several parts; non-text parts
    /// are skipped. `None` if there is no candidate.
    pub fn first_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();
        Some(text)
    }

    /// Why the prompt was blocked, if it was.
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
    }
}

// ─── History formatting ──────────────────────────────────────────

/// Formats history as Gemini contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeminiFormatter;

impl GeminiFormatter {
    fn role(role: Role) -> &'static str {
        match role {
            Role::User => "user",
            Role::Assistant => "model",
        }
    }
}

impl HistoryFormatter for GeminiFormatter {
    type Message = Content;

    fn format_history(&self, history: &SessionHistory) -> Vec<Content> {
        history
            .iter()
            .map(|turn| Content {
                role: Self::role(turn.role()),
                parts: vec![Part {
                    text: turn.text().to_string(),
                }],
            })
            .collect()
    }
}
