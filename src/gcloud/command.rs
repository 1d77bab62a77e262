//! Builds `gcloud` argument vectors from typed requests.
//!
//! Resource tokens (`dataproc jobs <verb> [<id>]`) always come first, then
//! `--format=json`, then the scoping flags, then optional flags. Optional
//! parameters that are absent produce no token at all.
//!
//! Each filter entry becomes its own `--filter=<key>=<value>` token, in
//! ascending key order. Filters are never joined into one expression here.

use std::collections::BTreeMap;

use crate::config::GcloudConfig;
use crate::error::{GcloudError, Result};

use super::request::{JobKind, JobQuery, JobRef, JobSubmission};

const FORMAT_JSON: &str = "--format=json";

/// Arguments for `gcloud dataproc jobs list`.
///
/// # Errors
///
/// Returns [`GcloudError::InvalidArgument`] when the project or region is
/// empty, a filter key is empty, the limit is zero, or the sort key is empty.
pub fn build_list_command(query: &JobQuery) -> Result<Vec<String>> {
    let mut args = resource_args("list", None);
    args.push(FORMAT_JSON.to_string());
    push_scope(&mut args, &query.project, &query.region)?;

    for (key, value) in &query.filters {
        if key.is_empty() {
            return Err(GcloudError::invalid_argument("filter", "filter key must not be empty"));
        }
        args.push(format!("--filter={key}={value}"));
    }

    if let Some(limit) = query.limit {
        if limit == 0 {
            return Err(GcloudError::invalid_argument("limit", "must be a positive integer"));
        }
        args.push(format!("--limit={limit}"));
    }

    if let Some(sort_by) = &query.sort_by {
        args.push(format!("--sort-by={}", required("sort_by", sort_by)?));
    }

    Ok(args)
}

/// Arguments for `gcloud dataproc jobs describe <id>`.
///
/// # Errors
///
/// Returns [`GcloudError::InvalidArgument`] when any part of the reference is empty.
pub fn build_describe_command(job: &JobRef) -> Result<Vec<String>> {
    let mut args = resource_args("describe", Some(required("job_id", &job.job_id)?));
    args.push(FORMAT_JSON.to_string());
    push_scope(&mut args, &job.project, &job.region)?;
    Ok(args)
}

/// Arguments for `gcloud dataproc jobs kill <id>`.
///
/// `--quiet` suppresses the confirmation prompt.
///
/// # Errors
///
/// Returns [`GcloudError::InvalidArgument`] when any part of the reference is empty.
pub fn build_cancel_command(job: &JobRef) -> Result<Vec<String>> {
    let mut args = resource_args("kill", Some(required("job_id", &job.job_id)?));
    args.push(FORMAT_JSON.to_string());
    push_scope(&mut args, &job.project, &job.region)?;
    args.push("--quiet".to_string());
    Ok(args)
}

/// Arguments for `gcloud dataproc jobs submit <kind>`.
///
/// Submission is asynchronous: the tool prints the created job and returns
/// without waiting for the driver. Driver arguments follow a `--` separator.
///
/// # Errors
///
/// Returns [`GcloudError::InvalidArgument`] when the project, region, cluster
/// or entry point is empty.
pub fn build_submit_command(submission: &JobSubmission) -> Result<Vec<String>> {
    let mut args = resource_args("submit", Some(submission.kind.subcommand()));
    if let JobKind::PySpark { main_file, .. } = &submission.kind {
        args.push(required("main_file", main_file)?.to_string());
    }
    args.push(FORMAT_JSON.to_string());
    push_scope(&mut args, &submission.project, &submission.region)?;
    args.push(format!("--cluster={}", required("cluster", &submission.cluster)?));
    args.push("--async".to_string());

    match &submission.kind {
        JobKind::Spark { main_class, jars } => {
            args.push(format!("--class={}", required("main_class", main_class)?));
            if !jars.is_empty() {
                args.push(format!("--jars={}", jars.join(",")));
            }
        }
        JobKind::PySpark { py_files, .. } => {
            if !py_files.is_empty() {
                args.push(format!("--py-files={}", py_files.join(",")));
            }
        }
        JobKind::Hadoop { main_jar } => {
            args.push(format!("--jar={}", required("main_jar", main_jar)?));
        }
    }

    if let Some(properties) = key_value_list(&submission.properties) {
        args.push(format!("--properties={properties}"));
    }
    if let Some(labels) = key_value_list(&submission.labels) {
        args.push(format!("--labels={labels}"));
    }

    if !submission.args.is_empty() {
        args.push("--".to_string());
        args.extend(submission.args.iter().cloned());
    }

    Ok(args)
}

/// Global flags carrying the explicit account and configuration context.
#[must_use]
pub fn global_flags(config: &GcloudConfig) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(account) = &config.account {
        args.push(format!("--account={account}"));
    }
    if let Some(configuration) = &config.configuration {
        args.push(format!("--configuration={configuration}"));
    }
    args
}

fn resource_args(verb: &str, target: Option<&str>) -> Vec<String> {
    let mut args = vec!["dataproc".to_string(), "jobs".to_string(), verb.to_string()];
    args.extend(target.map(ToString::to_string));
    args
}

fn push_scope(args: &mut Vec<String>, project: &str, region: &str) -> Result<()> {
    args.push(format!("--project={}", required("project", project)?));
    args.push(format!("--region={}", required("region", region)?));
    Ok(())
}

fn required<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        Err(GcloudError::invalid_argument(name, "must not be empty"))
    } else {
        Ok(value)
    }
}

fn key_value_list(entries: &BTreeMap<String, String>) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    let pairs: Vec<String> = entries.iter().map(|(k, v)| format!("{k}={v}")).collect();
    Some(pairs.join(","))
}
