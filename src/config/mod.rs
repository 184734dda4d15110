//! Configuration schema and loading
//!
//! The TOML configuration file carries the full caller-facing surface:
//! per-category pattern overrides, per-category replacement caps, an
//! optional RNG seed, and the audit/logging sections. Loading validates
//! category keys eagerly so typos fail at startup, not mid-run.

use crate::domain::{PhiCategory, PlainsightError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlainsightConfig {
    /// Seed for the engine RNG; omitted means entropy seeding
    pub seed: Option<u64>,

    /// Per-category pattern overrides, keyed by category label.
    /// An entry *replaces* the category's default patterns.
    #[serde(default)]
    pub patterns: BTreeMap<String, Vec<String>>,

    /// Per-category replacement caps per document, keyed by category label
    #[serde(default)]
    pub max_per_document: BTreeMap<String, usize>,

    /// Audit trail configuration
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PlainsightConfig {
    /// Load and validate configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PlainsightError::Configuration(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PlainsightError::Configuration(format!(
                "failed to read configuration file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate category keys and cap values
    pub fn validate(&self) -> Result<()> {
        for key in self.patterns.keys().chain(self.max_per_document.keys()) {
            if PhiCategory::from_config_key(key).is_none() {
                return Err(PlainsightError::Configuration(format!(
                    "unknown PHI category '{key}'"
                )));
            }
        }
        for (key, patterns) in &self.patterns {
            if patterns.is_empty() {
                return Err(PlainsightError::Configuration(format!(
                    "pattern override for '{key}' is empty; drop the key to keep defaults"
                )));
            }
        }
        Ok(())
    }

    /// Apply `PLAINSIGHT_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PLAINSIGHT_SEED") {
            self.seed = Some(val.parse().map_err(|_| {
                PlainsightError::Configuration(format!("invalid PLAINSIGHT_SEED value: {val}"))
            })?);
        }

        if let Ok(val) = std::env::var("PLAINSIGHT_AUDIT_ENABLED") {
            self.audit.enabled = val.parse().map_err(|_| {
                PlainsightError::Configuration(format!(
                    "invalid PLAINSIGHT_AUDIT_ENABLED value: {val}"
                ))
            })?;
        }

        if let Ok(val) = std::env::var("PLAINSIGHT_AUDIT_LOG_PATH") {
            self.audit.log_path = PathBuf::from(val);
        }

        Ok(())
    }

    /// Pattern overrides keyed by category
    pub fn pattern_overrides(&self) -> Result<HashMap<PhiCategory, Vec<String>>> {
        self.patterns
            .iter()
            .map(|(key, patterns)| {
                parse_category_key(key).map(|category| (category, patterns.clone()))
            })
            .collect()
    }

    /// Replacement caps keyed by category
    pub fn caps(&self) -> Result<HashMap<PhiCategory, usize>> {
        self.max_per_document
            .iter()
            .map(|(key, cap)| parse_category_key(key).map(|category| (category, *cap)))
            .collect()
    }
}

fn parse_category_key(key: &str) -> Result<PhiCategory> {
    PhiCategory::from_config_key(key)
        .ok_or_else(|| PlainsightError::Configuration(format!("unknown PHI category '{key}'")))
}

/// Audit trail configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable the audit trail
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON lines for audit entries
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/substitution.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write logs to a rotating file in addition to the console
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory for the rotating log file
    #[serde(default = "default_log_dir")]
    pub file_dir: String,
}

fn default_log_dir() -> String {
    "./logs".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_enabled: false,
            file_dir: default_log_dir(),
        }
    }
}
