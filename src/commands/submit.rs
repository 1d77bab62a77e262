//! `gcloud-jobs submit` command.

use crate::cli::{OutputFormat, Scope, SubmitKind};
use crate::gcloud::{GcloudExecutor, JobKind, JobSubmission};

use super::output::render_job;

/// Borrowed `submit` arguments.
pub struct Request<'a> {
    /// Project and region.
    pub scope: &'a Scope,
    /// Target cluster.
    pub cluster: &'a str,
    /// Job properties.
    pub properties: &'a [(String, String)],
    /// Job labels.
    pub labels: &'a [(String, String)],
    /// Job kind and driver arguments.
    pub kind: &'a SubmitKind,
}

/// Execute the `submit` command and print the created job.
///
/// # Errors
///
/// Returns an error string if the submission is invalid or gcloud fails.
pub fn run(
    executor: &GcloudExecutor<'_>,
    request: &Request<'_>,
    format: OutputFormat,
) -> Result<(), String> {
    let submission = build_submission(request);
    let job = executor.submit_job(&submission).map_err(|e| e.to_string())?;
    println!("{}", render_job(&job, format)?);
    Ok(())
}

fn build_submission(request: &Request<'_>) -> JobSubmission {
    let (kind, args) = match request.kind {
        SubmitKind::Spark { main_class, jars, args } => {
            (JobKind::Spark { main_class: main_class.clone(), jars: jars.clone() }, args)
        }
        SubmitKind::Pyspark { main_file, py_files, args } => (
            JobKind::PySpark { main_file: main_file.clone(), py_files: py_files.clone() },
            args,
        ),
        SubmitKind::Hadoop { jar, args } => (JobKind::Hadoop { main_jar: jar.clone() }, args),
    };

    let mut submission = JobSubmission::new(
        &request.scope.project,
        &request.scope.region,
        request.cluster,
        kind,
    );
    submission.properties.extend(request.properties.iter().cloned());
    submission.labels.extend(request.labels.iter().cloned());
    submission.args.clone_from(args);
    submission
}
