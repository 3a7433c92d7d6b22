// Cosmos Demo - Azure Cosmos DB database, container and document workflows
// Copyright (c) 2025 Cosmos Demo Contributors
// Licensed under the MIT License

use anyhow::Context;
use clap::Parser;
use cosmos_demo::adapters::database::ClientProvider;
use cosmos_demo::cli::Cli;
use cosmos_demo::config::load_config;
use cosmos_demo::core::WorkflowRunner;
use cosmos_demo::domain::DemoError;
use cosmos_demo::log_error_with_context;
use cosmos_demo::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let exit_code = match run(&cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e:#}");
            e.downcast_ref::<DemoError>()
                .map(DemoError::exit_code)
                .unwrap_or(5)
        }
    };

    process::exit(exit_code);
}

/// Load configuration, build the client and run the selected operation
///
/// The logging guard lives for the whole run so buffered file output is
/// flushed before the process exits.
async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config))?;

    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);
    let _guard = init_logging(log_level, &config.logging)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_path = %cli.config,
        "Cosmos DB demo"
    );

    let operation = cli.operation(&config.workflow)?;
    let provider = ClientProvider::from_config(&config.cosmosdb)?;

    let mut runner = WorkflowRunner::new(provider, std::io::stdout())
        .with_document_partition_key_path(config.workflow.document_partition_key_path.as_str());

    if let Err(e) = runner.run(&operation).await {
        log_error_with_context!(e, operation.name());
        return Err(e.into());
    }

    tracing::info!(operation = %operation, "Operation completed");
    Ok(())
}
