//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of provider settings without depending
//! on any serialization format (TOML, JSON, etc.).

use crate::core::error::DomainError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Which hosted completion API a session talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProviderKind {
    /// OpenAI chat completions (`role: user|assistant`, `content`).
    #[default]
    OpenAi,
    /// Google Gemini generateContent (`role: user|model`, `parts`).
    Gemini,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
        }
    }

    /// Short name used in the greeting ("powered by GPT").
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "GPT",
            ProviderKind::Gemini => "Gemini",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" | "gpt" => Ok(ProviderKind::OpenAi),
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            other => Err(DomainError::UnknownProvider(other.to_string())),
        }
    }
}

/// Top-level provider configuration.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// Provider used for the session.
    pub default: ProviderKind,
    /// Per-request HTTP timeout. `None` leaves it to the transport.
    pub request_timeout: Option<Duration>,
    /// OpenAI API settings.
    pub openai: OpenAiProviderConfig,
    /// Gemini API settings.
    pub gemini: GeminiProviderConfig,
}

/// OpenAI API provider configuration.
#[derive(Debug, Clone)]
pub struct OpenAiProviderConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// API key from the config file, used when the env var is unset.
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Max tokens per response (`None` = provider default).
    pub max_tokens: Option<u32>,
}

impl Default for OpenAiProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: None,
        }
    }
}

/// Gemini API provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiProviderConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// API key from the config file, used when the env var is unset.
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Attach the server-side Google Search grounding tool.
    pub enable_search: bool,
}

impl Default for GeminiProviderConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            enable_search: true,
        }
    }
}

impl ProviderConfig {
    /// Model identifier configured for the selected provider.
    pub fn model(&self) -> &str {
        match self.default {
            ProviderKind::OpenAi => &self.openai.model,
            ProviderKind::Gemini => &self.gemini.model,
        }
    }
}
