//! Runs job operations through a [`ProcessService`].

use tracing::{debug, warn};

use crate::config::GcloudConfig;
use crate::error::{GcloudError, Result};
use crate::model::Job;
use crate::ports::process::{Command, ProcessService};

use super::command::{
    build_cancel_command, build_describe_command, build_list_command, build_submit_command,
    global_flags,
};
use super::decode::{decode_job, decode_jobs};
use super::request::{JobQuery, JobRef, JobSubmission};

/// Executes `gcloud dataproc jobs` operations.
///
/// Each call builds one command, runs it exactly once, and decodes stdout
/// only when the tool exits with status 0. Nothing is retried or cached.
pub struct GcloudExecutor<'a> {
    process: &'a dyn ProcessService,
    config: GcloudConfig,
}

impl<'a> GcloudExecutor<'a> {
    /// Creates an executor with the default configuration.
    #[must_use]
    pub fn new(process: &'a dyn ProcessService) -> Self {
        Self::with_config(process, GcloudConfig::default())
    }

    /// Creates an executor with an explicit configuration.
    #[must_use]
    pub fn with_config(process: &'a dyn ProcessService, config: GcloudConfig) -> Self {
        Self { process, config }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &GcloudConfig {
        &self.config
    }

    /// Lists jobs matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`GcloudError::InvalidArgument`] for an invalid query,
    /// [`GcloudError::ExternalToolFailure`] on a non-zero exit,
    /// [`GcloudError::MalformedResponse`] when stdout is not a job array, and
    /// [`GcloudError::Process`] when the process could not be run.
    pub fn list_jobs(&self, query: &JobQuery) -> Result<Vec<Job>> {
        let output = self.run(build_list_command(query)?)?;
        decode_jobs(&output)
    }

    /// Fetches a single job.
    ///
    /// # Errors
    ///
    /// As for [`GcloudExecutor::list_jobs`], with stdout expected to be one job.
    pub fn describe_job(&self, job: &JobRef) -> Result<Job> {
        let output = self.run(build_describe_command(job)?)?;
        decode_job(&output)
    }

    /// Requests cancellation and returns the job as reported afterwards.
    ///
    /// # Errors
    ///
    /// As for [`GcloudExecutor::describe_job`].
    pub fn cancel_job(&self, job: &JobRef) -> Result<Job> {
        let output = self.run(build_cancel_command(job)?)?;
        decode_job(&output)
    }

    /// Submits a job without waiting for it to finish.
    ///
    /// # Errors
    ///
    /// As for [`GcloudExecutor::describe_job`].
    pub fn submit_job(&self, submission: &JobSubmission) -> Result<Job> {
        let output = self.run(build_submit_command(submission)?)?;
        decode_job(&output)
    }

    /// Runs one invocation and returns stdout on a zero exit code.
    fn run(&self, mut args: Vec<String>) -> Result<String> {
        args.extend(global_flags(&self.config));
        let command = Command::new(self.config.binary.as_str(), args);
        debug!(%command, "invoking gcloud");

        let result = self.process.execute_for_output(&command).map_err(GcloudError::Process)?;

        if result.exit_code != 0 {
            warn!(exit_code = result.exit_code, %command, "gcloud exited with failure");
            return Err(GcloudError::ExternalToolFailure {
                exit_code: result.exit_code,
                output: result.output,
                stderr: result.stderr,
            });
        }

        debug!(bytes = result.output.len(), "gcloud succeeded");
        Ok(result.output)
    }
}
