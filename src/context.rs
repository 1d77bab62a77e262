//! Service context selecting the process adapter for a run.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::{LiveProcessService, RecordingProcessService, ReplayingProcessService};
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::process::ProcessService;

/// Bundles the process port with any recording state attached to it.
///
/// Constructors wire up different adapter implementations (live, replaying,
/// recording).
pub struct ServiceContext {
    /// Process service used to run gcloud.
    pub process: Box<dyn ProcessService>,
    /// Recorder shared with the recording adapter, if recording.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context that spawns real processes.
    #[must_use]
    pub fn live() -> Self {
        Self { process: Box::new(LiveProcessService), recorder: None }
    }

    /// Creates a live context that also records every execution.
    ///
    /// The cassette is written to `path` by [`ServiceContext::finish`].
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, "gcloud-jobs-session")));
        let process =
            RecordingProcessService::new(Box::new(LiveProcessService), Arc::clone(&recorder));
        Self { process: Box::new(process), recorder: Some(recorder) }
    }

    /// Creates a context that replays executions from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self::replaying_cassette(&cassette))
    }

    /// Creates a context that replays executions from a loaded cassette.
    #[must_use]
    pub fn replaying_cassette(cassette: &Cassette) -> Self {
        let process = ReplayingProcessService::new(CassetteReplayer::new(cassette));
        Self { process: Box::new(process), recorder: None }
    }

    /// Finishes the session, writing the cassette when recording.
    ///
    /// Returns the cassette path when one was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the recorder is still shared or the cassette
    /// cannot be written.
    pub fn finish(self) -> Result<Option<PathBuf>, String> {
        let Self { process, recorder } = self;
        // Release the adapter's handle on the recorder.
        drop(process);

        let Some(recorder) = recorder else {
            return Ok(None);
        };
        let recorder = Arc::try_unwrap(recorder)
            .map_err(|_| "Recording adapter still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        let path = recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))?;
        Ok(Some(path))
    }
}
