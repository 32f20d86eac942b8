//! Persona configuration from TOML (`[persona]` section)

use jarvis_domain::persona::profile::{
    DEFAULT_CREATOR_KEYWORDS, DEFAULT_CREATOR_NAME, DEFAULT_CREATOR_PORTFOLIO,
    DEFAULT_CREATOR_PROFILE,
};
use jarvis_domain::{CreatorProfile, ProviderKind};
use serde::{Deserialize, Serialize};

/// Raw persona configuration from TOML
///
/// Every field defaults to the built-in creator profile, so an empty
/// section (or none at all) reproduces the stock behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePersonaConfig {
    /// Creator name shown in the bypass reply
    pub name: String,
    /// Portfolio link shown in the bypass reply
    pub portfolio_url: String,
    /// Biography text (markdown)
    pub profile: String,
    /// Trigger phrases (case-insensitive substring match)
    pub keywords: Vec<String>,
    /// Opening assistant turn. `{provider}` is replaced with the provider's
    /// display name.
    pub greeting: String,
}

impl Default for FilePersonaConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_CREATOR_NAME.to_string(),
            portfolio_url: DEFAULT_CREATOR_PORTFOLIO.to_string(),
            profile: DEFAULT_CREATOR_PROFILE.to_string(),
            keywords: DEFAULT_CREATOR_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            greeting: "Greetings, I am J.A.R.V.I.S. (powered by {provider}). How may I assist you today?"
                .to_string(),
        }
    }
}

impl FilePersonaConfig {
    pub fn to_creator_profile(&self) -> CreatorProfile {
        CreatorProfile::new(
            self.name.clone(),
            self.portfolio_url.clone(),
            self.profile.clone(),
            self.keywords.clone(),
        )
    }

    /// Greeting text for a session backed by `provider`.
    pub fn greeting_for(&self, provider: ProviderKind) -> String {
        self.greeting.replace("{provider}", provider.display_name())
    }
}
