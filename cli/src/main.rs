//! CLI entrypoint for prompt-arena
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use arena_application::{
    ComparisonLogger, NoopComparisonLogger, RunCompareInput, RunCompareUseCase,
};
use arena_domain::{Prompt, Provider};
use arena_infrastructure::{AdapterRegistry, ConfigLoader, JsonlComparisonLogger, ProxyServer};
use arena_presentation::{ChatRepl, Cli, ConsoleFormatter, OutputFormat, stdout_reporter};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
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
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    info!("Starting Prompt Arena");

    // Parse provider selection
    let providers: Vec<Provider> = if cli.provider.is_empty() {
        Provider::default_providers()
    } else {
        cli.provider
            .iter()
            .map(|s| s.parse())
            .collect::<Result<_, _>>()?
    };

    // === Dependency Injection ===
    let gateway = Arc::new(AdapterRegistry::from_config(&config));

    // Serve mode: run the proxy in the foreground
    if cli.serve {
        let bind = match cli.bind {
            Some(addr) => addr,
            None => config
                .server
                .bind
                .parse()
                .with_context(|| format!("Invalid bind address: {}", config.server.bind))?,
        };
        let server = ProxyServer::new(bind, gateway, config.server.sample_prompt.clone());
        return server.run().await;
    }

    // Chat mode
    if cli.chat {
        let repl = ChatRepl::new(gateway, providers)
            .with_progress(!cli.quiet)
            .with_output(cli.output);

        repl.run().await?;
        return Ok(());
    }

    // Single prompt mode - prompt is required and must be non-empty
    let prompt = match cli.prompt.as_deref().and_then(Prompt::try_new) {
        Some(p) => p,
        None => bail!("Please enter a prompt. Use --chat for interactive mode."),
    };

    // Print header
    if !cli.quiet {
        println!();
        println!("Prompt: {}", prompt);
        println!(
            "Providers: {}",
            providers
                .iter()
                .map(|p| p.display_name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
    }

    let logger: Arc<dyn ComparisonLogger> = match &config.output.log_dir {
        Some(dir) => {
            let path = dir.join("comparisons.jsonl");
            match JsonlComparisonLogger::new(&path) {
                Some(l) => Arc::new(l),
                None => Arc::new(NoopComparisonLogger),
            }
        }
        None => Arc::new(NoopComparisonLogger),
    };

    let use_case = RunCompareUseCase::new(gateway).with_logger(logger);
    let input = RunCompareInput {
        prompt,
        providers,
    };

    // Execute with or without progress reporting
    let result = if cli.quiet {
        use_case.execute(input).await?
    } else {
        let progress = stdout_reporter();
        use_case
            .execute_with_progress(input, progress.as_ref())
            .await?
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    Ok(())
}
