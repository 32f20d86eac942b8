//! Application-level configuration.
//!
//! This module provides configuration types that control how the turn
//! controller phrases its non-model replies.

/// Literal reply used when the provider call fails.
pub const DEFAULT_FALLBACK_MESSAGE: &str =
    "My systems are currently experiencing a brief technical fault. Please try again.";

/// Prefix of the error annotation shown before the fallback reply.
pub const DEFAULT_ERROR_PREFIX: &str = "I encountered an error trying to access the AI";

/// Chat behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatBehavior {
    /// Assistant text substituted for a failed provider call.
    pub fallback_message: String,
    /// Lead-in of the visible error annotation (`"{prefix}: {cause}"`).
    pub error_prefix: String,
}

impl Default for ChatBehavior {
    fn default() -> Self {
        Self {
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            error_prefix: DEFAULT_ERROR_PREFIX.to_string(),
        }
    }
}

impl ChatBehavior {
    /// Format the annotation rendered for a provider failure.
    pub fn error_annotation(&self, cause: &impl std::fmt::Display) -> String {
        format!("{}: {}", self.error_prefix, cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fallback_literal() {
        let behavior = ChatBehavior::default();
        assert_eq!(
            behavior.fallback_message,
            "My systems are currently experiencing a brief technical fault. Please try again."
        );
    }

    #[test]
    fn test_error_annotation_format() {
        let behavior = ChatBehavior::default();
        assert_eq!(
            behavior.error_annotation(&"timed out"),
            "I encountered an error trying to access the AI: timed out"
        );
    }
}
