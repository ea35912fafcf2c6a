//! CLI entrypoint for SmartHealth Assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use assistant_application::{
    AskQuestionUseCase, BehaviorConfig, CheckEndpointUseCase, ConversationLogger,
    NoConversationLogger, SparqlEndpoint,
};
use assistant_domain::{OutputFormat, capabilities, example_questions};
use assistant_infrastructure::{ConfigLoader, FileConfig, FusekiClient, JsonlConversationLogger};
use assistant_presentation::{ChatRepl, Cli, ConsoleFormatter, ProgressReporter};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
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
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // Static catalog, no endpoint needed
    if cli.examples {
        println!("{}", ConsoleFormatter::format_examples(example_questions()));
        return Ok(());
    }
    if cli.capabilities {
        println!("{}", ConsoleFormatter::format_capabilities(&capabilities()));
        return Ok(());
    }

    let config = load_config(&cli)?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting SmartHealth Assistant against {}", config.fuseki.url);

    // === Dependency Injection ===
    let endpoint: Arc<dyn SparqlEndpoint> = Arc::new(FusekiClient::from_config(&config.fuseki)?);

    if cli.status {
        let status = CheckEndpointUseCase::new(endpoint).execute().await;
        println!("{}", ConsoleFormatter::format_status(&status));
        if !status.reachable {
            std::process::exit(1);
        }
        return Ok(());
    }

    let expose_sparql = config.assistant.expose_sparql || cli.show_sparql;
    let behavior = BehaviorConfig::from_timeout_seconds(Some(config.fuseki.timeout_seconds.max(1)))
        .with_expose_sparql(expose_sparql);

    let conversation_logger: Arc<dyn ConversationLogger> = match config
        .assistant
        .conversation_log
        .as_deref()
        .and_then(JsonlConversationLogger::open)
    {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    };

    let use_case = AskQuestionUseCase::new(endpoint.clone())
        .with_behavior(behavior)
        .with_conversation_logger(conversation_logger);

    let mut output: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    // The answer-only format never prints SPARQL
    if cli.show_sparql && output == OutputFormat::Answer {
        output = OutputFormat::Full;
    }

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(use_case, CheckEndpointUseCase::new(endpoint))
            .with_progress(!cli.quiet && config.repl.show_progress)
            .with_output(output)
            .with_history_file(config.repl.history_file.as_deref().map(PathBuf::from));

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    let result = if cli.quiet || output == OutputFormat::Json {
        use_case.execute(&question).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(&question, &progress).await
    };

    match result {
        Ok(answer) => {
            println!("{}", ConsoleFormatter::render(&answer, output));
            Ok(())
        }
        Err(e) => {
            debug!("Question failed: {}", e);
            eprintln!("{}", ConsoleFormatter::format_error(&e));
            std::process::exit(1);
        }
    }
}

/// Load configuration, apply CLI overrides and reject invalid settings
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(url) = &cli.endpoint {
        config.fuseki.url = url.clone();
    }

    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue);
    }
    if let Some(issue) = issues.iter().find(|i| i.is_error()) {
        bail!("Invalid configuration: {}", issue);
    }

    Ok(config)
}
