//! Error types for gcloud job operations.

use thiserror::Error;

/// Result type alias for gcloud job operations.
pub type Result<T> = std::result::Result<T, GcloudError>;

/// Errors surfaced while building, running, or decoding a gcloud invocation.
#[derive(Debug, Error)]
pub enum GcloudError {
    /// A caller-supplied parameter was empty or out of range.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The tool exited with a non-zero status.
    #[error("gcloud exited with status {exit_code}: {}", diagnostic(.output, .stderr))]
    ExternalToolFailure {
        /// Process exit code.
        exit_code: i32,
        /// Captured standard output.
        output: String,
        /// Captured standard error.
        stderr: String,
    },

    /// The tool exited cleanly but its output did not have the expected shape.
    #[error("malformed gcloud response: {source}")]
    MalformedResponse {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The process execution service itself failed.
    #[error(transparent)]
    Process(Box<dyn std::error::Error + Send + Sync>),
}

impl GcloudError {
    /// Create an invalid-argument error for the named parameter.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument { name, reason: reason.into() }
    }

    /// Returns the exit code when the tool itself reported failure.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ExternalToolFailure { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}

/// Picks the most useful captured stream for the error message.
fn diagnostic<'a>(output: &'a str, stderr: &'a str) -> &'a str {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        output.trim()
    } else {
        stderr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_failure_message_prefers_stderr() {
        let err = GcloudError::ExternalToolFailure {
            exit_code: 1,
            output: "partial".into(),
            stderr: "ERROR: (gcloud.dataproc.jobs.list) PERMISSION_DENIED\n".into(),
        };
        assert_eq!(
            err.to_string(),
            "gcloud exited with status 1: ERROR: (gcloud.dataproc.jobs.list) PERMISSION_DENIED"
        );
        assert_eq!(err.exit_code(), Some(1));
    }

    #[test]
    fn tool_failure_message_falls_back_to_output() {
        let err = GcloudError::ExternalToolFailure {
            exit_code: 2,
            output: "usage: gcloud".into(),
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "gcloud exited with status 2: usage: gcloud");
    }

    #[test]
    fn invalid_argument_names_the_parameter() {
        let err = GcloudError::invalid_argument("project", "must not be empty");
        assert_eq!(err.to_string(), "invalid argument `project`: must not be empty");
        assert_eq!(err.exit_code(), None);
    }
}
