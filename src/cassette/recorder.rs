//! Records executions into a cassette file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, Execution, Outcome};
use crate::ports::process::Command;

/// Collects executions and writes them as a YAML cassette file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    executions: Vec<Execution>,
    next_seq: u64,
}

impl CassetteRecorder {
    /// Create a new recorder that will write to the given path.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), executions: Vec::new(), next_seq: 0 }
    }

    /// Record an execution. The `seq` field is assigned automatically.
    pub fn record(&mut self, command: Command, outcome: Outcome) {
        self.executions.push(Execution { seq: self.next_seq, command, outcome });
        self.next_seq += 1;
    }

    /// Finish recording and write the cassette YAML file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let cassette =
            Cassette { name: self.name, recorded_at: Utc::now(), executions: self.executions };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}
