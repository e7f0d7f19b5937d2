//! JSONL audit log for store mutations.
//!
//! Every create, update, and delete against the in-process store can be
//! appended to a JSONL file, one timestamped entry per line, for debugging
//! and auditing. The log is append-only and can be read back for inspection.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CatalogKind;

/// A mutation recorded in the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum AuditOperation {
    /// A record was created.
    Create {
        /// Catalog the record belongs to.
        catalog: CatalogKind,
        /// Id assigned to the new record.
        id: i64,
    },
    /// A record was replaced.
    Update {
        /// Catalog the record belongs to.
        catalog: CatalogKind,
        /// Id of the replaced record.
        id: i64,
    },
    /// A record was removed.
    Delete {
        /// Catalog the record belonged to.
        catalog: CatalogKind,
        /// Id of the removed record.
        id: i64,
    },
}

/// One line of the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the mutation completed.
    pub timestamp: DateTime<Utc>,
    /// What happened.
    #[serde(flatten)]
    pub operation: AuditOperation,
    /// Whether the mutation succeeded.
    pub success: bool,
}

impl AuditEntry {
    /// Creates an entry timestamped now.
    pub fn new(operation: AuditOperation, success: bool) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            success,
        }
    }
}

/// Append-only JSONL log of store mutations.
pub struct AuditLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl AuditLog {
    /// Creates a log that appends to `path`. The file is created on first
    /// append.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Appends one entry as a single JSON line.
    pub fn append(&self, entry: &AuditEntry) -> Result<(), std::io::Error> {
        let line = serde_json::to_string(entry)?;
        let _guard = self.write_lock.lock().unwrap();
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", line)
    }

    /// Appends one entry, warning on stderr instead of failing the mutation
    /// that produced it.
    pub fn append_or_warn(&self, entry: &AuditEntry) {
        if let Err(e) = self.append(entry) {
            eprintln!("Warning: failed to append audit entry to {:?}: {}", self.path, e);
        }
    }

    /// Reads every entry back, in append order.
    pub fn read_entries(&self) -> Result<Vec<AuditEntry>, std::io::Error> {
        let file = std::fs::File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            entries.push(serde_json::from_str(&line)?);
        }
        Ok(entries)
    }
}
