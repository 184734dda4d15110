//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Plainsight using
//! clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Plainsight - PHI placeholder substitution for tagged clinical text
#[derive(Parser, Debug)]
#[command(name = "plainsight")]
#[command(version, about, long_about = None)]
#[command(author = "Plainsight Contributors")]
pub struct Cli {
    /// Path to configuration file; omit to run with built-in defaults
    #[arg(short, long, env = "PLAINSIGHT_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PLAINSIGHT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace placeholder tags in a text file with surrogates
    Run(commands::run::RunArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["plainsight", "run", "--input", "report.txt"]);
        assert!(cli.config.is_none());
        assert!(matches!(cli.command, Commands::Run(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from([
            "plainsight",
            "--config",
            "custom.toml",
            "run",
            "--input",
            "-",
        ]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
    }

    #[test]
    fn test_cli_parse_run_with_seed_and_mapping() {
        let cli = Cli::parse_from([
            "plainsight",
            "run",
            "--input",
            "report.txt",
            "--seed",
            "42",
            "--mapping",
            "mapping.json",
        ]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.seed, Some(42));
                assert!(args.mapping.is_some());
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["plainsight", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["plainsight", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
