//! Typed command construction and response decoding for `gcloud dataproc jobs`.
//!
//! [`gcloud::command`] turns typed requests into argument vectors,
//! [`gcloud::decode`] turns `--format=json` output into [`model::Job`]
//! records, and [`gcloud::GcloudExecutor`] runs them through an injected
//! [`ports::ProcessService`].

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod gcloud;
pub mod model;
pub mod ports;

pub use config::GcloudConfig;
pub use error::{GcloudError, Result};
pub use gcloud::{GcloudExecutor, JobKind, JobQuery, JobRef, JobSubmission};
pub use model::Job;

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}
