//! Validate config command implementation
//!
//! Loads the configuration, builds a registry and engine from it, and
//! reports what a run would use. Pattern conflicts and bad regexes
//! surface here instead of mid-run.

use crate::config::PlainsightConfig;
use crate::core::SubstitutionEngine;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match PlainsightConfig::from_file(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Building the engine compiles every pattern and runs the
        // cross-category duplicate check.
        match SubstitutionEngine::from_config(&config) {
            Ok(_) => {
                println!("✅ Patterns compile and no category conflicts found");
                println!();
                println!("Configuration Summary:");
                println!(
                    "  Seed: {}",
                    config
                        .seed
                        .map_or("entropy".to_string(), |s| s.to_string())
                );
                println!("  Pattern overrides: {}", config.patterns.len());
                println!("  Capped categories: {}", config.max_per_document.len());
                for (category, cap) in &config.max_per_document {
                    println!("    {category}: max {cap}");
                }
                println!("  Audit enabled: {}", config.audit.enabled);
                if config.audit.enabled {
                    println!("  Audit log: {}", config.audit.log_path.display());
                }
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2)
            }
        }
    }
}
