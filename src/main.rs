// Plainsight - PHI placeholder substitution for tagged clinical text
// Copyright (c) 2025 Plainsight Contributors
// Licensed under the MIT License

use clap::Parser;
use plainsight::cli::{Cli, Commands};
use plainsight::config::PlainsightConfig;
use plainsight::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Logging config comes from the config file when one is given, so the
    // file layer can be enabled there; console logging always works.
    let logging_config = cli
        .config
        .as_deref()
        .and_then(|path| PlainsightConfig::from_file(path).ok())
        .map(|c| c.logging)
        .unwrap_or_default();

    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Plainsight - PHI placeholder substitution"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Run(args) => args.execute(cli.config.as_deref()),
        Commands::ValidateConfig(args) => {
            args.execute(cli.config.as_deref().unwrap_or("plainsight.toml"))
        }
        Commands::Init(args) => args.execute(),
    }
}
