//! Recording adapter for the `ProcessService` port.

use std::sync::{Arc, Mutex};

use crate::cassette::format::Outcome;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::process::{Command, ProcessResult, ProcessService};

/// Records executions while delegating to an inner implementation.
pub struct RecordingProcessService {
    inner: Box<dyn ProcessService>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingProcessService {
    /// Creates a new recording service wrapping the given implementation.
    pub fn new(inner: Box<dyn ProcessService>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ProcessService for RecordingProcessService {
    fn execute_for_output(
        &self,
        command: &Command,
    ) -> Result<ProcessResult, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.execute_for_output(command);
        let outcome = match &result {
            Ok(output) => Outcome::Ok(output.clone()),
            Err(e) => Outcome::Err { message: e.to_string() },
        };
        self.recorder.lock().expect("recorder lock poisoned").record(command.clone(), outcome);
        result
    }
}
