//! Replaying adapter for the `ProcessService` port.

use std::sync::Mutex;

use tracing::debug;

use crate::cassette::format::Outcome;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::process::{Command, ProcessResult, ProcessService};

/// Serves recorded process results from a cassette.
pub struct ReplayingProcessService {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingProcessService {
    /// Creates a new replaying service from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ProcessService for ReplayingProcessService {
    fn execute_for_output(
        &self,
        command: &Command,
    ) -> Result<ProcessResult, Box<dyn std::error::Error + Send + Sync>> {
        let execution =
            self.replayer.lock().expect("replayer lock poisoned").next_execution(command)?;
        debug!(seq = execution.seq, "replaying recorded execution");
        match execution.outcome {
            Outcome::Ok(result) => Ok(result),
            Outcome::Err { message } => Err(message.into()),
        }
    }
}
