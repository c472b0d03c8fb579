//! CLI entrypoint for policy-desk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use desk_application::{
    ConversationOrchestrator, DocumentStore, LlmGateway, ModelClient, NoProgress,
    TurnProgressNotifier,
};
use desk_domain::OutputFormat;
use desk_infrastructure::{
    AnthropicGateway, AutoExtractor, ConfigLoader, FileConfig, JsonlConversationLogger,
    OpenAiGateway, ProviderKind,
};
use desk_presentation::{
    ChatRepl, Cli, ConsoleFormatter, CredentialGate, OutputConfig, ProgressReporter, ReplConfig,
};
use secrecy::SecretString;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    let _log_guard = init_tracing(cli.verbose, config.logging.file.as_deref());
    info!("Starting policy-desk");

    for issue in config.check()? {
        warn!("{}", issue.message);
    }
    ConsoleFormatter::configure(&OutputConfig {
        color: config.output.color,
    });

    // === Credential gate ===
    let kind = config.provider_kind();
    let api_key_env = cli.api_key_env.clone().unwrap_or_else(|| match kind {
        ProviderKind::Anthropic => config.provider.anthropic.api_key_env.clone(),
        ProviderKind::OpenAi => config.provider.openai.api_key_env.clone(),
    });
    let api_key = CredentialGate::new(api_key_env).resolve()?;

    // === Dependency Injection ===
    let gateway = build_gateway(kind, &config, api_key)?;
    info!("Using {} provider", gateway.name());

    let store = DocumentStore::new(Arc::new(AutoExtractor::discover()));
    let document = store
        .load(&config.document.path)
        .context("Could not load the reference document")?;

    let client = ModelClient::new(gateway, config.conversation_params());
    let mut orchestrator = ConversationOrchestrator::new(client, document);
    if let Some(path) = &config.logging.conversation_log {
        match JsonlConversationLogger::new(path) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                orchestrator = orchestrator.with_conversation_logger(Arc::new(logger));
            }
            None => warn!("Conversation log disabled"),
        }
    }

    let show_progress = !cli.quiet && config.repl.show_progress;

    // Single question mode
    if let Some(question) = &cli.question {
        let progress: Box<dyn TurnProgressNotifier> = if show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        };
        let report = orchestrator.submit(question, progress.as_ref()).await?;

        let output = match config.output.format.unwrap_or_default() {
            OutputFormat::Text => ConsoleFormatter::format_report(&report),
            OutputFormat::Json => ConsoleFormatter::format_json(&report),
        };
        println!("{}", output.trim_end());

        return Ok(if report.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    // Chat mode
    let mut repl = ChatRepl::new(orchestrator).with_config(ReplConfig {
        show_progress,
        history_file: config.repl.history_path(),
    });
    repl.run().await?;

    Ok(ExitCode::SUCCESS)
}

/// Command-line flags take precedence over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.model.name = model.clone();
    }
    if let Some(document) = &cli.document {
        config.document.path = document.clone();
    }
    if let Some(provider) = &cli.provider {
        config.provider.kind = Some(provider.clone());
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
    if let Some(path) = &cli.conversation_log {
        config.logging.conversation_log = Some(path.clone());
    }
}

fn build_gateway(
    kind: ProviderKind,
    config: &FileConfig,
    api_key: SecretString,
) -> Result<Arc<dyn LlmGateway>> {
    let gateway: Arc<dyn LlmGateway> = match kind {
        ProviderKind::Anthropic => {
            let settings = &config.provider.anthropic;
            Arc::new(
                AnthropicGateway::new(api_key, Duration::from_secs(settings.timeout_seconds))?
                    .with_base_url(&settings.base_url)
                    .with_api_version(&settings.api_version),
            )
        }
        ProviderKind::OpenAi => {
            let settings = &config.provider.openai;
            Arc::new(
                OpenAiGateway::new(api_key, Duration::from_secs(settings.timeout_seconds))?
                    .with_base_url(&settings.base_url),
            )
        }
    };
    Ok(gateway)
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins over `-v`. The returned guard must live until exit so the
/// file writer flushes.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path.file_name().unwrap_or(path.as_os_str());
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    guard
}
