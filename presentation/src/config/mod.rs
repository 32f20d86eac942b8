//! Presentation-level configuration
//!
//! Settings for the interactive REPL.

use std::path::{Path, PathBuf};

/// Capacity of the line-editor history file
pub const HISTORY_CAPACITY: usize = 1000;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Show a spinner while the provider is working
    pub show_progress: bool,
    /// Path to history file (unset = platform data directory)
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Where input history is kept.
    ///
    /// A leading `~/` in the configured path is expanded to the home
    /// directory. Without a configured path, `<data_dir>/jarvis/history.txt`.
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => Some(expand_home(path)),
            None => dirs::data_dir().map(|d| d.join("jarvis").join("history.txt")),
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
