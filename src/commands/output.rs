//! Rendering of job results.

use crate::cli::OutputFormat;
use crate::model::Job;

/// Render a list of jobs.
///
/// # Errors
///
/// Returns an error string if JSON serialization fails.
pub fn render_jobs(jobs: &[Job], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => to_json(&jobs),
        OutputFormat::Table => Ok(table(jobs)),
    }
}

/// Render a single job.
///
/// # Errors
///
/// Returns an error string if JSON serialization fails.
pub fn render_job(job: &Job, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => to_json(job),
        OutputFormat::Table => Ok(table(std::slice::from_ref(job))),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to render JSON: {e}"))
}

fn table(jobs: &[Job]) -> String {
    if jobs.is_empty() {
        return "Listed 0 jobs.".to_string();
    }

    let rows: Vec<(&str, &str, &str, &str)> = jobs
        .iter()
        .map(|job| {
            (
                job.id(),
                job.state(),
                job.placement.cluster_name.as_str(),
                job.status.state_start_time.as_deref().unwrap_or(""),
            )
        })
        .collect();

    // Calculate column widths.
    // Padding counts chars, so widths must too.
    let width = |cell: &str| cell.chars().count();
    let id_width = rows.iter().map(|r| width(r.0)).max().unwrap_or(6).max(6);
    let state_width = rows.iter().map(|r| width(r.1)).max().unwrap_or(6).max(6);
    let cluster_width = rows.iter().map(|r| width(r.2)).max().unwrap_or(7).max(7);

    let mut lines = vec![format!(
        "{:<id_width$}  {:<state_width$}  {:<cluster_width$}  {}",
        "JOB_ID", "STATUS", "CLUSTER", "SINCE",
    )];
    for (id, state, cluster, since) in &rows {
        let line = format!(
            "{id:<id_width$}  {state:<state_width$}  {cluster:<cluster_width$}  {since}"
        );
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}
