//! Typed requests for job operations.

use std::collections::BTreeMap;

/// Parameters for listing jobs.
///
/// Filters use map semantics: inserting a key twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    /// Project to list jobs in.
    pub project: String,
    /// Region the jobs run in.
    pub region: String,
    /// Filter clauses, each rendered as `<key>=<value>`.
    pub filters: BTreeMap<String, String>,
    /// Maximum number of jobs to return.
    pub limit: Option<u32>,
    /// Field to sort by.
    pub sort_by: Option<String>,
}

impl JobQuery {
    /// Create a query for all jobs in `project` and `region`.
    pub fn new(project: impl Into<String>, region: impl Into<String>) -> Self {
        Self { project: project.into(), region: region.into(), ..Self::default() }
    }

    /// Add (or replace) a filter clause.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Cap the number of results.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sort results by the given field.
    #[must_use]
    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }
}

/// Addresses a single job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRef {
    /// Owning project.
    pub project: String,
    /// Region the job runs in.
    pub region: String,
    /// Job identifier.
    pub job_id: String,
}

impl JobRef {
    /// Create a reference to `job_id` in `project` and `region`.
    pub fn new(
        project: impl Into<String>,
        region: impl Into<String>,
        job_id: impl Into<String>,
    ) -> Self {
        Self { project: project.into(), region: region.into(), job_id: job_id.into() }
    }
}

/// The kind of job to submit and its entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobKind {
    /// A Spark job started from a main class.
    Spark {
        /// Fully qualified driver class.
        main_class: String,
        /// Jars added to the driver and executor classpaths.
        jars: Vec<String>,
    },
    /// A `PySpark` job started from a Python file.
    PySpark {
        /// Driver file URI.
        main_file: String,
        /// Extra Python files.
        py_files: Vec<String>,
    },
    /// A Hadoop `MapReduce` job started from a jar.
    Hadoop {
        /// Jar containing the main class.
        main_jar: String,
    },
}

impl JobKind {
    /// The `gcloud dataproc jobs submit` subcommand for this kind.
    #[must_use]
    pub fn subcommand(&self) -> &'static str {
        match self {
            Self::Spark { .. } => "spark",
            Self::PySpark { .. } => "pyspark",
            Self::Hadoop { .. } => "hadoop",
        }
    }
}

/// Parameters for submitting a job to a cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSubmission {
    /// Project to submit to.
    pub project: String,
    /// Region of the cluster.
    pub region: String,
    /// Target cluster name.
    pub cluster: String,
    /// Job kind and entry point.
    pub kind: JobKind,
    /// Job properties, rendered as one `--properties` list.
    pub properties: BTreeMap<String, String>,
    /// Job labels, rendered as one `--labels` list.
    pub labels: BTreeMap<String, String>,
    /// Arguments passed through to the job driver.
    pub args: Vec<String>,
}

impl JobSubmission {
    /// Create a submission of `kind` to `cluster`.
    pub fn new(
        project: impl Into<String>,
        region: impl Into<String>,
        cluster: impl Into<String>,
        kind: JobKind,
    ) -> Self {
        Self {
            project: project.into(),
            region: region.into(),
            cluster: cluster.into(),
            kind,
            properties: BTreeMap::new(),
            labels: BTreeMap::new(),
            args: Vec::new(),
        }
    }

    /// Set a job property.
    #[must_use]
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Set a job label.
    #[must_use]
    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Append a driver argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}
