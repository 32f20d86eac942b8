//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::{HISTORY_CAPACITY, ReplConfig};
use crate::output::console::{ConsoleFormatter, ConsoleRenderer, USER_LABEL};
use jarvis_application::TurnController;
use jarvis_domain::ChatSession;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use tracing::{debug, warn};

/// A slash command typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    History,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a trimmed input line. Returns `None` for ordinary messages.
    pub fn parse(line: &str) -> Option<Self> {
        if !line.starts_with('/') {
            return None;
        }

        let command = match line {
            "/help" | "/h" | "/?" => Self::Help,
            "/history" => Self::History,
            "/quit" | "/exit" | "/q" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        };
        Some(command)
    }
}

/// Interactive chat REPL
///
/// Owns the session: one line is processed to completion before the next
/// prompt is shown.
pub struct ChatRepl {
    controller: TurnController,
    session: ChatSession,
    renderer: ConsoleRenderer,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(controller: TurnController, session: ChatSession, config: ReplConfig) -> Self {
        let renderer = ConsoleRenderer::new()
            .with_echo_user(false)
            .with_progress(config.show_progress);

        Self {
            controller,
            session,
            renderer,
            config,
        }
    }

    /// Run the interactive REPL until `/quit` or Ctrl-D
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = self.config.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("Could not open history file {}: {}", path.display(), e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(USER_LABEL.to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(buffer) => {
                    let line = buffer.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command) {
                            break;
                        }
                        continue;
                    }

                    self.process_message(line).await;
                }
                Signal::CtrlC => continue,
                Signal::CtrlD => {
                    println!("Goodbye.");
                    break;
                }
            }
        }

        debug!(
            session = %self.session.id(),
            turns = self.session.history().len(),
            "Chat session ended"
        );
        Ok(())
    }

    fn print_welcome(&self) {
        let provider = self.controller.provider();
        println!(
            "{}",
            ConsoleFormatter::banner(provider.kind().display_name(), provider.model())
        );
        println!("{}", ConsoleFormatter::help());

        // The greeting is the first assistant turn
        self.renderer.render_all(self.session.history());
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Goodbye.");
                true
            }
            ReplCommand::Help => {
                println!("{}", ConsoleFormatter::help());
                false
            }
            ReplCommand::History => {
                println!();
                self.renderer.render_all(self.session.history());
                false
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&mut self, message: &str) {
        println!();
        let outcome = self
            .controller
            .submit(&mut self.session, message, &self.renderer)
            .await;
        debug!(source = outcome.source.as_str(), "Turn complete");
    }
}
