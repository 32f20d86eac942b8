//! OpenAI chat completions provider

mod provider;
mod types;

pub use provider::OpenAiProvider;
pub use types::OpenAiFormatter;
