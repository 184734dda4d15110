//! Init command implementation
//!
//! Generates a starter configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "plainsight.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Plainsight configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::starter_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: plainsight validate-config");
                println!("  3. Run: plainsight run --input report.txt --output anonymized.txt");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(2)
            }
        }
    }

    fn starter_config() -> &'static str {
        r#"# Plainsight configuration

# Fixed seed makes runs reproducible; remove for fresh randomness per run.
# seed = 42

# Per-category pattern overrides. An entry REPLACES the category's default
# patterns, it does not extend them. Category keys: person_name,
# person_initials, date, time, phone_number, address, patient_id, z_number,
# location, document_id, document_sub_id, phi_number, age, hospital_name,
# accreditation_number, study_name.
#
# [patterns]
# person_name = ['<NAAM>', '<NAME>']

# Per-category replacement caps per document. A capped category stops
# being replaced once the cap is reached; later occurrences stay as-is.
#
# [max_per_document]
# patient_id = 2

[audit]
enabled = false
log_path = "./audit/substitution.log"
json_format = true

[logging]
file_enabled = false
file_dir = "./logs"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlainsightConfig;

    #[test]
    fn test_starter_config_parses_and_validates() {
        let config: PlainsightConfig = toml::from_str(InitArgs::starter_config()).unwrap();
        assert!(config.validate().is_ok());
        assert!(!config.audit.enabled);
    }
}
