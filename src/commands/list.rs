//! `gcloud-jobs list` command.

use crate::cli::{OutputFormat, Scope};
use crate::gcloud::{GcloudExecutor, JobQuery};

use super::output::render_jobs;

/// Execute the `list` command.
///
/// Repeated filter keys keep the last value given.
///
/// # Errors
///
/// Returns an error string if the query is invalid or gcloud fails.
pub fn run(
    executor: &GcloudExecutor<'_>,
    scope: &Scope,
    filters: &[(String, String)],
    limit: Option<u32>,
    sort_by: Option<&str>,
    format: OutputFormat,
) -> Result<(), String> {
    let query = build_query(scope, filters, limit, sort_by);
    let jobs = executor.list_jobs(&query).map_err(|e| e.to_string())?;
    println!("{}", render_jobs(&jobs, format)?);
    Ok(())
}

fn build_query(
    scope: &Scope,
    filters: &[(String, String)],
    limit: Option<u32>,
    sort_by: Option<&str>,
) -> JobQuery {
    let mut query = filters
        .iter()
        .fold(JobQuery::new(&scope.project, &scope.region), |query, (key, value)| {
            query.filter(key, value)
        });
    query.limit = limit;
    query.sort_by = sort_by.map(ToString::to_string);
    query
}
