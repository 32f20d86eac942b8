//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain/application types
//! at the edge.

mod chat;
mod logging;
mod persona;
mod providers;
mod repl;

pub use chat::FileChatConfig;
pub use logging::FileLoggingConfig;
pub use persona::FilePersonaConfig;
pub use providers::{FileGeminiConfig, FileOpenAiConfig, FileProvidersConfig};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider selection and credentials
    pub providers: FileProvidersConfig,
    /// Creator profile and greeting
    pub persona: FilePersonaConfig,
    /// Fallback and error wording
    pub chat: FileChatConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Diagnostic and conversation logging
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Non-fatal problems worth a warning at startup.
    ///
    /// Fatal problems (unknown provider, missing key) surface as errors when
    /// the provider is built instead.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.persona.keywords.is_empty() {
            warnings.push(
                "persona.keywords is empty: creator questions will be sent to the model"
                    .to_string(),
            );
        }

        if self
            .persona
            .keywords
            .iter()
            .any(|keyword| keyword.trim().is_empty())
        {
            warnings.push(
                "persona.keywords contains a blank entry: every message will match it".to_string(),
            );
        }

        if self.chat.fallback_message.trim().is_empty() {
            warnings.push(
                "chat.fallback_message is blank: failed turns will show no reply".to_string(),
            );
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jarvis_domain::ProviderKind;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[providers]
default = "gemini"

[providers.openai]
model = "gpt-4o-mini"

[providers.gemini]
api_key_env = "GOOGLE_API_KEY"

[persona]
name = "Tony Stark"
greeting = "At your service ({provider})."

[chat]
fallback_message = "Systems offline."

[repl]
show_progress = false
history_file = "~/.local/share/jarvis/history.txt"

[logging]
conversation_log = "jarvis.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let providers = config.providers.to_provider_config().unwrap();
        assert_eq!(providers.default, ProviderKind::Gemini);
        assert_eq!(providers.openai.model, "gpt-4o-mini");
        assert_eq!(providers.gemini.api_key_env, "GOOGLE_API_KEY");
        assert_eq!(config.persona.to_creator_profile().name(), "Tony Stark");
        assert_eq!(
            config.persona.greeting_for(ProviderKind::Gemini),
            "At your service (Gemini)."
        );
        assert_eq!(config.chat.to_behavior().fallback_message, "Systems offline.");
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some("jarvis.jsonl")
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[providers.openai]
max_tokens = 1024
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.providers.openai.max_tokens, Some(1024));
        // Defaults should apply
        assert!(config.providers.default.is_none());
        assert_eq!(config.persona, FilePersonaConfig::default());
        assert!(config.repl.show_progress);
        assert!(config.logging.dir.is_none());
    }

    #[test]
    fn test_validate_default_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_blank_keyword_and_fallback() {
        let mut config = FileConfig::default();
        config.persona.keywords = vec!["who built you".to_string(), " ".to_string()];
        config.chat.fallback_message = String::new();

        let warnings = config.validate();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("blank entry"));
        assert!(warnings[1].contains("fallback_message"));
    }
}
