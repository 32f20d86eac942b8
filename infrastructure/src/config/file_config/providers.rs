//! Provider configuration from TOML (`[providers]` section)

use jarvis_domain::{
    DomainError, GeminiProviderConfig, OpenAiProviderConfig, ProviderConfig, ProviderKind,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use env var or .env instead).
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API (can point at any compatible server).
    pub base_url: String,
    /// Model identifier (default: "gpt-3.5-turbo").
    pub model: String,
    /// Max tokens per response (unset = provider default).
    pub max_tokens: Option<u32>,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        let defaults = OpenAiProviderConfig::default();
        Self {
            api_key_env: defaults.api_key_env,
            api_key: defaults.api_key,
            base_url: defaults.base_url,
            model: defaults.model,
            max_tokens: defaults.max_tokens,
        }
    }
}

impl FileOpenAiConfig {
    pub fn to_provider_config(&self) -> OpenAiProviderConfig {
        OpenAiProviderConfig {
            api_key_env: self.api_key_env.clone(),
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
        }
    }
}

/// Gemini API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use env var or .env instead).
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Model identifier (default: "gemini-2.5-flash").
    pub model: String,
    /// Attach the Google Search grounding tool (default: true).
    pub enable_search: bool,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        let defaults = GeminiProviderConfig::default();
        Self {
            api_key_env: defaults.api_key_env,
            api_key: defaults.api_key,
            base_url: defaults.base_url,
            model: defaults.model,
            enable_search: defaults.enable_search,
        }
    }
}

impl FileGeminiConfig {
    pub fn to_provider_config(&self) -> GeminiProviderConfig {
        GeminiProviderConfig {
            api_key_env: self.api_key_env.clone(),
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            enable_search: self.enable_search,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Provider to use: "openai" (default) or "gemini".
    pub default: Option<String>,
    /// HTTP request timeout in seconds (unset = no timeout).
    pub timeout_seconds: Option<u64>,
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
    /// Gemini API settings.
    pub gemini: FileGeminiConfig,
}

impl FileProvidersConfig {
    /// Convert to the domain type, validating the provider name.
    pub fn to_provider_config(&self) -> Result<ProviderConfig, DomainError> {
        let default = match self.default.as_deref() {
            Some(name) => name.parse::<ProviderKind>()?,
            None => ProviderKind::default(),
        };

        Ok(ProviderConfig {
            default,
            request_timeout: self.timeout_seconds.map(Duration::from_secs),
            openai: self.openai.to_provider_config(),
            gemini: self.gemini.to_provider_config(),
        })
    }
}
