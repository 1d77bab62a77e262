//! `gcloud-jobs cancel` command.

use crate::cli::{OutputFormat, Scope};
use crate::gcloud::{GcloudExecutor, JobRef};

use super::output::render_job;

/// Execute the `cancel` command and print the job's reported state.
///
/// # Errors
///
/// Returns an error string if the job ID is empty or gcloud fails.
pub fn run(
    executor: &GcloudExecutor<'_>,
    scope: &Scope,
    job_id: &str,
    format: OutputFormat,
) -> Result<(), String> {
    let job_ref = JobRef::new(&scope.project, &scope.region, job_id);
    let job = executor.cancel_job(&job_ref).map_err(|e| e.to_string())?;
    println!("{}", render_job(&job, format)?);
    Ok(())
}
