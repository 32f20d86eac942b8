//! CLI command definitions

use clap::{Parser, ValueEnum};
use jarvis_domain::ProviderKind;
use std::path::PathBuf;

/// Provider choice on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    /// OpenAI chat completions (GPT)
    Openai,
    /// Google Gemini generateContent
    Gemini,
}

impl From<ProviderArg> for ProviderKind {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Openai => ProviderKind::OpenAi,
            ProviderArg::Gemini => ProviderKind::Gemini,
        }
    }
}

/// CLI arguments for jarvis
#[derive(Parser, Debug)]
#[command(name = "jarvis")]
#[command(author, version, about = "J.A.R.V.I.S. - a conversational front-end for hosted LLMs")]
#[command(long_about = r#"
J.A.R.V.I.S. forwards your messages, together with the whole conversation so
far, to a hosted language model (OpenAI GPT or Google Gemini) and shows the
reply. Questions about who built the assistant are answered locally.

API keys are read from the environment, a .env file in the working
directory, or `api_key` in the config file:
  OPENAI_API_KEY   for --provider openai
  GEMINI_API_KEY   for --provider gemini

Configuration files are loaded from (in priority order):
1. JARVIS_* environment variables (e.g. JARVIS_PROVIDERS__DEFAULT=gemini)
2. --config <path>     Explicit config file
3. ./jarvis.toml       Project-level config
4. ~/.config/jarvis/config.toml   Global config

Example:
  jarvis
  jarvis --provider gemini
  jarvis "Summarize the plot of Hamlet in two sentences"
"#)]
pub struct Cli {
    /// Send a single message, print the reply and exit (omit for chat mode)
    pub message: Option<String>,

    /// Provider to talk to (overrides [providers].default)
    #[arg(short, long, value_enum)]
    pub provider: Option<ProviderArg>,

    /// Model identifier for the selected provider
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Disable Google Search grounding (Gemini only)
    #[arg(long)]
    pub no_search: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL transcript of the conversation to this file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_chat_mode() {
        let cli = Cli::try_parse_from(["jarvis"]).unwrap();
        assert!(cli.message.is_none());
        assert!(cli.provider.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_one_shot_with_overrides() {
        let cli = Cli::try_parse_from([
            "jarvis",
            "--provider",
            "gemini",
            "--model",
            "gemini-2.0-flash",
            "--no-search",
            "-vv",
            "hello there",
        ])
        .unwrap();

        assert_eq!(cli.message.as_deref(), Some("hello there"));
        assert_eq!(cli.provider.map(ProviderKind::from), Some(ProviderKind::Gemini));
        assert_eq!(cli.model.as_deref(), Some("gemini-2.0-flash"));
        assert!(cli.no_search);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_provider_rejected() {
        assert!(Cli::try_parse_from(["jarvis", "--provider", "claude"]).is_err());
    }
}
