//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rotated diagnostic logs (unset = stderr)
    pub dir: Option<String>,
    /// JSONL conversation transcript path (unset = disabled)
    pub conversation_log: Option<String>,
}
