//! Audit logger for substitution runs

use crate::domain::{AnonymizedText, MappingRecord, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry for one run
#[derive(Debug, Serialize)]
struct AuditEntry {
    timestamp: String,
    source_id: String,
    replacement_count: usize,
    replacements: Vec<AuditReplacement>,
}

/// Audit record for one replacement
#[derive(Debug, Serialize)]
struct AuditReplacement {
    category: String,
    pattern: String,
    /// SHA-256 hash of the original span; plaintext never reaches the log
    original_hash: String,
    surrogate: String,
    start: usize,
    end: usize,
}

/// Append-only audit logger
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log one substitution run
    ///
    /// `source_id` identifies the document (the CLI passes the input
    /// path). Runs without a kept mapping log the count they do know:
    /// zero replacements.
    pub fn log_run(&self, source_id: &str, result: &AnonymizedText) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let records = result.mapping.as_deref().unwrap_or(&[]);
        let entry = AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            source_id: source_id.to_string(),
            replacement_count: records.len(),
            replacements: records.iter().map(Self::audit_replacement).collect(),
        };

        self.write_entry(&entry)
    }

    fn audit_replacement(record: &MappingRecord) -> AuditReplacement {
        AuditReplacement {
            category: record.category.label().to_string(),
            pattern: record.pattern.clone(),
            original_hash: hash_value(&record.original),
            surrogate: record.surrogate.clone(),
            start: record.start,
            end: record.end,
        }
    }

    fn write_entry(&self, entry: &AuditEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        if self.json_format {
            let json_line = serde_json::to_string(entry)?;
            writeln!(file, "{json_line}")?;
        } else {
            writeln!(
                file,
                "[{}] Source: {} | Replacements: {}",
                entry.timestamp, entry.source_id, entry.replacement_count
            )?;
        }

        Ok(())
    }
}

/// SHA-256 hex digest of a value
fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    format!("{digest:x}")
}
