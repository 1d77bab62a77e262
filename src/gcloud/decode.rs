//! Decodes `--format=json` output into job records.
//!
//! The shape is checked on a parsed [`Value`] first: a derived struct
//! deserializer would also accept a JSON array positionally.

use serde::de;
use serde_json::Value;

use crate::error::{GcloudError, Result};
use crate::model::Job;

/// Decode a JSON array of jobs, preserving order.
///
/// # Errors
///
/// Returns [`GcloudError::MalformedResponse`] when `raw` is not valid JSON,
/// is not an array, or contains an element that is not a job object.
pub fn decode_jobs(raw: &str) -> Result<Vec<Job>> {
    match parse(raw)? {
        Value::Array(elements) => elements.into_iter().map(job_from_value).collect(),
        other => Err(shape_error(&other, "an array of job objects")),
    }
}

/// Decode a single job object.
///
/// # Errors
///
/// Returns [`GcloudError::MalformedResponse`] when `raw` is not a JSON object.
pub fn decode_job(raw: &str) -> Result<Job> {
    job_from_value(parse(raw)?)
}

fn parse(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|source| GcloudError::MalformedResponse { source })
}

fn job_from_value(value: Value) -> Result<Job> {
    if !value.is_object() {
        return Err(shape_error(&value, "a job object"));
    }
    serde_json::from_value(value).map_err(|source| GcloudError::MalformedResponse { source })
}

fn shape_error(found: &Value, expected: &str) -> GcloudError {
    let kind = match found {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    let message = format!("expected {expected}, found {kind}");
    GcloudError::MalformedResponse { source: <serde_json::Error as de::Error>::custom(message) }
}
