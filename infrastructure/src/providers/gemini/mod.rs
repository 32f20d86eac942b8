//! Google Gemini generateContent provider

mod provider;
mod types;

pub use provider::GeminiProvider;
pub use types::GeminiFormatter;
