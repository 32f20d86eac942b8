//! CLI entrypoint for J.A.R.V.I.S.
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use jarvis_application::{ConversationLogger, NoConversationLogger, TurnController};
use jarvis_domain::{ChatSession, ProviderConfig, ProviderKind};
use jarvis_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, StartupError, create_provider, load_dotenv,
};
use jarvis_presentation::{ChatRepl, Cli, ConsoleRenderer, ReplConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // .env first, so JARVIS_* overrides placed there reach the config loader
    load_dotenv();

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(StartupError::from)?
    };

    let _log_guard = init_logging(cli.verbose, config.logging.dir.as_deref())?;

    info!("Starting J.A.R.V.I.S.");

    for warning in config.validate() {
        warn!("{}", warning);
    }

    if let Some(provider) = cli.provider {
        config.providers.default = Some(ProviderKind::from(provider).as_str().to_string());
    }
    let providers = provider_config(&cli, &config)?;

    // === Dependency Injection ===
    let provider = create_provider(&providers)?;
    let kind = provider.kind();

    let mut controller = TurnController::new(
        provider,
        Arc::new(config.persona.to_creator_profile()),
    )
    .with_behavior(config.chat.to_behavior());

    let conversation_log = cli
        .conversation_log
        .clone()
        .or_else(|| config.logging.conversation_log.as_ref().map(PathBuf::from));
    controller = controller.with_conversation_logger(conversation_logger(conversation_log));

    let mut session = ChatSession::with_greeting(session_id(), config.persona.greeting_for(kind));
    let show_progress = config.repl.show_progress && !cli.quiet;

    // Single message mode
    if let Some(message) = cli.message.as_deref() {
        let message = message.trim();
        if message.is_empty() {
            bail!("Message is empty. Run without arguments for interactive mode.");
        }

        let renderer = ConsoleRenderer::new()
            .with_echo_user(false)
            .with_progress(show_progress);
        let outcome = controller.submit(&mut session, message, &renderer).await;

        return Ok(if outcome.error.is_some() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    // Chat mode
    let repl_config = ReplConfig {
        show_progress,
        history_file: config.repl.history_file.as_ref().map(PathBuf::from),
    };
    let mut repl = ChatRepl::new(controller, session, repl_config);
    repl.run().await?;

    Ok(ExitCode::SUCCESS)
}

/// Provider settings with command-line overrides applied.
fn provider_config(cli: &Cli, config: &FileConfig) -> Result<ProviderConfig, StartupError> {
    let mut providers = config.providers.to_provider_config()?;

    if let Some(model) = &cli.model {
        match providers.default {
            ProviderKind::OpenAi => providers.openai.model = model.clone(),
            ProviderKind::Gemini => providers.gemini.model = model.clone(),
        }
    }

    if cli.no_search {
        providers.gemini.enable_search = false;
    }

    Ok(providers)
}

/// Initialize logging based on verbosity level.
///
/// With a log directory, diagnostics go to a daily-rotated file instead of
/// stderr. The returned guard must live until exit to flush the file.
fn init_logging(verbose: u8, log_dir: Option<&str>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug,hyper=info,reqwest=info"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, "jarvis.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(non_blocking)
                .with_ansi(false)
                .init();

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();

            Ok(None)
        }
    }
}

fn conversation_logger(path: Option<PathBuf>) -> Arc<dyn ConversationLogger> {
    match path.as_deref().and_then(open_transcript) {
        Some(logger) => Arc::new(logger),
        None => Arc::new(NoConversationLogger),
    }
}

fn open_transcript(path: &Path) -> Option<JsonlConversationLogger> {
    let logger = JsonlConversationLogger::open(path)?;
    info!("Conversation transcript: {}", logger.path().display());
    Some(logger)
}

fn session_id() -> String {
    chrono::Local::now().format("%Y%m%d-%H%M%S").to_string()
}
