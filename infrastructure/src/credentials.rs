//! API key resolution
//!
//! Lookup order for a provider's key:
//!
//! 1. The process environment (after [`load_dotenv`] merged a `.env` file)
//! 2. `api_key` in the provider's config section
//!
//! Blank values count as missing.

use crate::error::StartupError;
use jarvis_domain::ProviderKind;
use tracing::{debug, warn};

/// Load a `.env` file from the current directory or its parents, if any.
///
/// Variables already set in the environment win over the file.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Could not load .env file: {}", e),
    }
}

/// Resolve the API key for `provider` from the environment or config.
pub fn resolve_api_key(
    provider: ProviderKind,
    env_var: &str,
    configured: Option<&str>,
) -> Result<String, StartupError> {
    resolve_with(provider, env_var, configured, |name| std::env::var(name).ok())
}

fn resolve_with(
    provider: ProviderKind,
    env_var: &str,
    configured: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, StartupError> {
    let from_env = lookup(env_var).filter(|v| !v.trim().is_empty());
    if let Some(key) = from_env {
        debug!(provider = %provider, "Using API key from ${}", env_var);
        return Ok(key);
    }

    if let Some(key) = configured.filter(|v| !v.trim().is_empty()) {
        debug!(provider = %provider, "Using API key from config file");
        return Ok(key.to_string());
    }

    Err(StartupError::MissingCredential {
        provider,
        var: env_var.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |_| value.map(str::to_string)
    }

    #[test]
    fn test_env_wins_over_config() {
        let key = resolve_with(
            ProviderKind::OpenAi,
            "OPENAI_API_KEY",
            Some("from-config"),
            env_with(Some("from-env")),
        )
        .unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn test_config_used_when_env_missing_or_blank() {
        for env in [None, Some(""), Some("   ")] {
            let key = resolve_with(
                ProviderKind::Gemini,
                "GEMINI_API_KEY",
                Some("from-config"),
                env_with(env),
            )
            .unwrap();
            assert_eq!(key, "from-config");
        }
    }

    #[test]
    fn test_missing_everywhere_is_error() {
        let err = resolve_with(
            ProviderKind::Gemini,
            "GEMINI_API_KEY",
            Some(""),
            env_with(None),
        )
        .unwrap_err();

        match err {
            StartupError::MissingCredential { provider, var } => {
                assert_eq!(provider, ProviderKind::Gemini);
                assert_eq!(var, "GEMINI_API_KEY");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
