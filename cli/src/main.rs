//! CLI entrypoint for portal-bot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use portal_bot_application::{
    ConversationLogger, DispatchQueryInput, DispatchQueryOutput, DispatchQueryUseCase,
    NoConversationLogger,
};
use portal_bot_domain::{CallerId, OutputFormat};
use portal_bot_infrastructure::{
    ConfigLoader, FileConfig, InMemoryPortalStore, JsonlConversationLogger, read_history,
};
use portal_bot_presentation::{Cli, ConsoleFormatter};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    // --no-config skips discovered files; an explicit --config is still honored
    let config = match (cli.no_config, &cli.config) {
        (true, None) => Ok(ConfigLoader::load_defaults()),
        (true, Some(path)) => ConfigLoader::load_file(path),
        (false, path) => ConfigLoader::load(path.as_ref()),
    }
    .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
    config.validate().context("Invalid configuration")?;

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    if cli.no_color || !config.output.color || format == OutputFormat::Json {
        colored::control::set_override(false);
    }

    let Some(caller) = cli.caller.map(CallerId::new) else {
        bail!("--caller is required.");
    };

    if let Some(limit) = cli.history {
        return print_history(&config, caller, limit, format);
    }

    let Some(text) = cli.text else {
        bail!("A question is required. Use --history to list past exchanges.");
    };

    // === Dependency Injection ===
    let Some(dataset_path) = cli.dataset.as_ref().or(config.dataset.path.as_ref()) else {
        bail!("No dataset configured. Pass --dataset or set [dataset] path.");
    };
    let store = Arc::new(InMemoryPortalStore::load(dataset_path)?);
    let clock = Arc::new(config.clock.to_clock()?);
    let router = config.dispatch_config()?.build_router()?;

    let logger: Arc<dyn ConversationLogger> = match &config.log.conversation_log {
        Some(path) => match JsonlConversationLogger::new(path) {
            Some(logger) => Arc::new(logger),
            None => Arc::new(NoConversationLogger),
        },
        None => Arc::new(NoConversationLogger),
    };

    let use_case = DispatchQueryUseCase::new(store, clock)
        .with_router(router)
        .with_conversation_logger(logger);

    info!("Dispatching query for caller {}", caller);
    let output = use_case
        .execute(DispatchQueryInput::new(caller, text))
        .await?;

    println!("{}", render(&output, format));

    Ok(())
}

fn render(output: &DispatchQueryOutput, format: OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => ConsoleFormatter::format(output),
        OutputFormat::Json => ConsoleFormatter::format_json(output),
    }
}

fn print_history(
    config: &FileConfig,
    caller: CallerId,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let Some(path) = &config.log.conversation_log else {
        warn!("No conversation log configured; history is empty");
        return Ok(());
    };

    for exchange in read_history(path, caller, limit)? {
        if format == OutputFormat::Json {
            println!("{}", serde_json::to_string(&exchange)?);
            continue;
        }
        let output = DispatchQueryOutput {
            intent: exchange.intent,
            entries: exchange.entries,
        };
        println!(
            "{}\n",
            ConsoleFormatter::format_exchange(
                &exchange.timestamp.to_rfc3339(),
                &exchange.text,
                &output
            )
        );
    }

    Ok(())
}
