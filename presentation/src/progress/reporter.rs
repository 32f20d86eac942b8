//! Spinner shown while waiting for the provider

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports the Processing state with an indicatif spinner
pub struct ProgressReporter {
    message: String,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            message: "J.A.R.V.I.S. is thinking...".to_string(),
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start spinning. A spinner that is already running is replaced.
    pub fn start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(self.message.dimmed().to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    /// Stop spinning and erase the spinner line.
    pub fn finish(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    #[cfg(test)]
    pub(crate) fn is_active(&self) -> bool {
        self.spinner
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_finish() {
        let progress = ProgressReporter::new();
        assert!(!progress.is_active());

        progress.start();
        assert!(progress.is_active());
        progress.start();
        assert!(progress.is_active());

        progress.finish();
        assert!(!progress.is_active());
        // Finishing twice is harmless
        progress.finish();
    }
}
