//! Cassette data structures for recording and replaying executions.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::process::{Command, ProcessResult};

/// How a recorded execution ended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The process ran; any exit code.
    Ok(ProcessResult),
    /// The process service failed.
    Err {
        /// The error message.
        message: String,
    },
}

/// A single recorded process execution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Execution {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// The command that was run.
    pub command: Command,
    /// What it produced.
    pub outcome: Outcome,
}

/// A cassette containing a sequence of recorded executions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Executions in the order they happened.
    pub executions: Vec<Execution>,
}

impl Cassette {
    /// Read and parse a YAML cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error string if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}
