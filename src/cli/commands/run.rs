//! Run command implementation
//!
//! Reads a tagged text file, replaces every eligible placeholder with a
//! surrogate, and writes the anonymized text plus (optionally) the
//! replacement mapping.

use crate::audit::AuditLogger;
use crate::config::PlainsightConfig;
use crate::core::SubstitutionEngine;
use anyhow::Context;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Input text file ("-" for stdin)
    #[arg(short, long)]
    pub input: String,

    /// Output file ("-" for stdout)
    #[arg(short, long, default_value = "-")]
    pub output: String,

    /// Write the replacement mapping as JSON to this path
    #[arg(short, long)]
    pub mapping: Option<PathBuf>,

    /// RNG seed for reproducible runs; overrides the configuration file
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input, "Starting substitution run");

        let mut config = match config_path {
            Some(path) => PlainsightConfig::from_file(path)?,
            None => PlainsightConfig::default(),
        };
        config.apply_env_overrides()?;
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        let text = self.read_input()?;

        let mut engine = SubstitutionEngine::from_config(&config)?;
        let keep_mapping = self.mapping.is_some() || config.audit.enabled;
        let result = engine.run(&text, keep_mapping);

        self.write_output(&result.text)?;

        if let Some(ref mapping_path) = self.mapping {
            let records = result.mapping.as_deref().unwrap_or(&[]);
            let json = serde_json::to_string_pretty(records)
                .context("Failed to serialize mapping")?;
            std::fs::write(mapping_path, json).with_context(|| {
                format!("Failed to write mapping file: {}", mapping_path.display())
            })?;
            println!("🗂  Mapping written to {}", mapping_path.display());
        }

        let audit_logger = AuditLogger::new(
            config.audit.log_path.clone(),
            config.audit.json_format,
            config.audit.enabled,
        )?;
        audit_logger.log_run(&self.input, &result)?;

        let stats = result.stats_by_category();
        tracing::info!(
            replacements = result.replacement_count(),
            categories = stats.len(),
            "Substitution run complete"
        );
        if keep_mapping {
            println!("✅ Replaced {} placeholder(s)", result.replacement_count());
            let mut by_category: Vec<_> = stats.into_iter().collect();
            by_category.sort_by_key(|(category, _)| category.label());
            for (category, count) in by_category {
                println!("   {category}: {count}");
            }
        } else {
            println!("✅ Substitution complete");
        }

        Ok(0)
    }

    fn read_input(&self) -> anyhow::Result<String> {
        if self.input == "-" {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read from stdin")?;
            Ok(text)
        } else {
            std::fs::read_to_string(&self.input)
                .with_context(|| format!("Failed to read input file: {}", self.input))
        }
    }

    fn write_output(&self, text: &str) -> anyhow::Result<()> {
        if self.output == "-" {
            print!("{text}");
            Ok(())
        } else {
            std::fs::write(&self.output, text)
                .with_context(|| format!("Failed to write output file: {}", self.output))
        }
    }
}
