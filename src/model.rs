//! Job records as reported by `gcloud dataproc jobs`.
//!
//! Field names mirror the Dataproc job resource. Every field defaults when
//! absent or `null`, and unknown fields are ignored, so newer tool versions
//! decode cleanly.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A Dataproc job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    /// Project and job identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub reference: JobReference,
    /// Cluster the job runs on.
    #[serde(deserialize_with = "null_as_default")]
    pub placement: JobPlacement,
    /// Current status.
    #[serde(deserialize_with = "null_as_default")]
    pub status: JobStatus,
    /// Previous statuses, oldest first.
    #[serde(deserialize_with = "statuses")]
    pub status_history: Vec<JobStatus>,
    /// User labels attached to the job.
    #[serde(deserialize_with = "labels")]
    pub labels: BTreeMap<String, String>,
    /// Cloud Storage URI of the driver output.
    pub driver_output_resource_uri: Option<String>,
    /// Cloud Storage URI of the driver control files.
    pub driver_control_files_uri: Option<String>,
    /// Server-generated job UUID.
    pub job_uuid: Option<String>,
    /// Whether the job has reached a terminal state.
    #[serde(deserialize_with = "null_as_default")]
    pub done: bool,
}

impl Job {
    /// The job identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.reference.job_id
    }

    /// The current state, e.g. `RUNNING` or `DONE`.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.status.state
    }
}

/// Identifies a job within a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobReference {
    /// Owning project.
    #[serde(deserialize_with = "null_as_default")]
    pub project_id: String,
    /// Job identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub job_id: String,
}

/// Where a job was placed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPlacement {
    /// Cluster name.
    #[serde(deserialize_with = "null_as_default")]
    pub cluster_name: String,
    /// Cluster UUID.
    #[serde(deserialize_with = "null_as_default")]
    pub cluster_uuid: String,
}

/// A job state together with when it was entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobStatus {
    /// State name.
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    /// Optional human-readable details.
    pub details: Option<String>,
    /// RFC 3339 timestamp the state was entered.
    pub state_start_time: Option<String>,
    /// Optional state substate.
    pub substate: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` entries become default statuses so positions in the history hold.
fn statuses<'de, D>(deserializer: D) -> Result<Vec<JobStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<Option<JobStatus>>> = Option::deserialize(deserializer)?;
    Ok(entries.unwrap_or_default().into_iter().map(Option::unwrap_or_default).collect())
}

/// Labels with a `null` value are dropped.
fn labels<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<BTreeMap<String, Option<String>>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_read_nested_fields() {
        let job: Job = serde_json::from_str(
            r#"{"reference": {"projectId": "p", "jobId": "job-1"}, "status": {"state": "RUNNING"}}"#,
        )
        .unwrap();
        assert_eq!(job.id(), "job-1");
        assert_eq!(job.state(), "RUNNING");
        assert!(!job.done);
        assert!(job.status_history.is_empty());
    }

    #[test]
    fn null_fields_decode_to_defaults() {
        for raw in [
            r#"{"labels": null}"#,
            r#"{"status": null}"#,
            r#"{"status": {"state": null}}"#,
            r#"{"done": null}"#,
            r#"{"labels": {"team": null}}"#,
            r#"{"reference": {"projectId": null, "jobId": null}, "placement": null}"#,
        ] {
            let job: Job = serde_json::from_str(raw).unwrap_or_else(|e| panic!("{raw}: {e}"));
            assert_eq!(job, Job::default(), "{raw}");
        }
    }

    #[test]
    fn null_history_entries_keep_their_position() {
        let job: Job =
            serde_json::from_str(r#"{"statusHistory": [null, {"state": "RUNNING"}]}"#).unwrap();
        assert_eq!(job.status_history.len(), 2);
        assert_eq!(job.status_history[0], JobStatus::default());
        assert_eq!(job.status_history[1].state, "RUNNING");
    }

    #[test]
    fn empty_object_decodes_to_defaults() {
        let job: Job = serde_json::from_str("{}").unwrap();
        assert_eq!(job, Job::default());
        assert_eq!(job.id(), "");
    }
}
