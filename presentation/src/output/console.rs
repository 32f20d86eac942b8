//! Console rendering of chat turns

use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use jarvis_application::ChatRenderer;
use jarvis_domain::{Role, Turn};

/// Label shown above assistant turns
pub const ASSISTANT_LABEL: &str = "J.A.R.V.I.S.";
/// Label shown above user turns
pub const USER_LABEL: &str = "You";

/// Formats turns and notices for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one turn: colored role label, then the text
    pub fn format_turn(turn: &Turn) -> String {
        let label = match turn.role() {
            Role::User => format!("{}:", USER_LABEL).cyan().bold(),
            Role::Assistant => format!("{}:", ASSISTANT_LABEL).green().bold(),
        };
        format!("{}\n{}\n", label, turn.text())
    }

    /// Format a visible error annotation
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    /// Startup banner for the interactive mode
    pub fn banner(provider: &str, model: &str) -> String {
        let title = "J.A.R.V.I.S. AI System";
        let line = "─".repeat(45);
        format!(
            "\n╭{line}╮\n│{:^45}│\n╰{line}╯\n\n{} {} ({})\n",
            title.bold(),
            "Provider:".cyan().bold(),
            provider,
            model.dimmed(),
        )
    }

    /// Slash command summary
    pub fn help() -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Commands:".cyan().bold()));
        output.push_str("  /help, /h, /?     - Show this help\n");
        output.push_str("  /history          - Show the conversation so far\n");
        output.push_str("  /quit, /exit, /q  - Exit chat\n");
        output.push_str("  Ctrl-C clears the line, Ctrl-D exits\n");
        output
    }
}

/// [`ChatRenderer`] writing to the terminal
///
/// User turns are echoed only when `echo_user` is set: in the REPL the line
/// editor already shows what was typed.
pub struct ConsoleRenderer {
    echo_user: bool,
    progress: Option<ProgressReporter>,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            echo_user: false,
            progress: None,
        }
    }

    /// Echo user turns as they are submitted
    pub fn with_echo_user(mut self, echo: bool) -> Self {
        self.echo_user = echo;
        self
    }

    /// Show a spinner while the provider is working
    pub fn with_progress(mut self, show: bool) -> Self {
        self.progress = show.then(ProgressReporter::new);
        self
    }

    /// Render every turn regardless of `echo_user` (for `/history`)
    pub fn render_all<'a>(&self, turns: impl IntoIterator<Item = &'a Turn>) {
        for turn in turns {
            println!("{}", ConsoleFormatter::format_turn(turn));
        }
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatRenderer for ConsoleRenderer {
    fn render_turn(&self, turn: &Turn) {
        if turn.is_user() && !self.echo_user {
            return;
        }
        println!("{}", ConsoleFormatter::format_turn(turn));
    }

    fn render_error(&self, message: &str) {
        eprintln!("{}", ConsoleFormatter::format_error(message));
    }

    fn on_request_start(&self) {
        if let Some(progress) = &self.progress {
            progress.start();
        }
    }

    fn on_request_end(&self) {
        if let Some(progress) = &self.progress {
            progress.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_turn_labels_by_role() {
        plain();
        assert_eq!(
            ConsoleFormatter::format_turn(&Turn::user("hello")),
            "You:\nhello\n"
        );
        assert_eq!(
            ConsoleFormatter::format_turn(&Turn::assistant("Hi there")),
            "J.A.R.V.I.S.:\nHi there\n"
        );
    }

    #[test]
    fn test_format_error() {
        plain();
        assert_eq!(
            ConsoleFormatter::format_error("I encountered an error trying to access the AI: HTTP 401"),
            "Error: I encountered an error trying to access the AI: HTTP 401"
        );
    }

    #[test]
    fn test_banner_names_provider() {
        plain();
        let banner = ConsoleFormatter::banner("GPT", "gpt-3.5-turbo");
        assert!(banner.contains("J.A.R.V.I.S. AI System"));
        assert!(banner.contains("Provider: GPT (gpt-3.5-turbo)"));
    }

    #[test]
    fn test_help_lists_commands() {
        let help = ConsoleFormatter::help();
        for command in ["/help", "/history", "/quit"] {
            assert!(help.contains(command));
        }
    }

    #[test]
    fn test_renderer_progress_toggle() {
        let renderer = ConsoleRenderer::new().with_progress(true);
        renderer.on_request_start();
        assert!(renderer.progress.as_ref().unwrap().is_active());
        renderer.on_request_end();
        assert!(!renderer.progress.as_ref().unwrap().is_active());

        let quiet = ConsoleRenderer::new().with_progress(false);
        assert!(quiet.progress.is_none());
        quiet.on_request_start();
        quiet.on_request_end();
    }
}
