//! Chat behavior configuration from TOML (`[chat]` section)

use jarvis_application::ChatBehavior;
use serde::{Deserialize, Serialize};

/// Raw chat behavior configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Assistant reply used when the provider call fails
    pub fallback_message: String,
    /// Lead-in of the error annotation shown on provider failure
    pub error_prefix: String,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        let behavior = ChatBehavior::default();
        Self {
            fallback_message: behavior.fallback_message,
            error_prefix: behavior.error_prefix,
        }
    }
}

impl FileChatConfig {
    pub fn to_behavior(&self) -> ChatBehavior {
        ChatBehavior {
            fallback_message: self.fallback_message.clone(),
            error_prefix: self.error_prefix.clone(),
        }
    }
}
