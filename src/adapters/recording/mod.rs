//! Recording adapters that capture interactions to cassettes.

pub mod process;

pub use process::RecordingProcessService;
