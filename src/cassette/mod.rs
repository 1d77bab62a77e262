//! Cassettes of recorded gcloud executions.
//!
//! A cassette stores each command together with its result so that a session
//! against a real project can be replayed without the tool installed.

pub mod format;
pub mod recorder;
pub mod replayer;
