//! CLI argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for `gcloud-jobs`.
#[derive(Debug, Parser)]
#[command(name = "gcloud-jobs", version, about = "List and manage Dataproc jobs through gcloud")]
pub struct Cli {
    /// gcloud binary to invoke (overrides `GCLOUD_JOBS_BINARY`).
    #[arg(long, global = true)]
    pub binary: Option<String>,
    /// Account to run as (overrides `GCLOUD_JOBS_ACCOUNT`).
    #[arg(long, global = true)]
    pub account: Option<String>,
    /// Named gcloud configuration (overrides `GCLOUD_JOBS_CONFIGURATION`).
    #[arg(long, global = true)]
    pub configuration: Option<String>,
    /// How to print jobs.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Output rendering for job results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns.
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Project and region every job operation is scoped to.
#[derive(Debug, Args)]
pub struct Scope {
    /// Project ID.
    #[arg(long)]
    pub project: String,
    /// Dataproc region.
    #[arg(long)]
    pub region: String,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List jobs.
    List {
        /// Project and region.
        #[command(flatten)]
        scope: Scope,
        /// Filter clause as KEY=VALUE (repeatable).
        #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        filters: Vec<(String, String)>,
        /// Maximum number of jobs to return.
        #[arg(long)]
        limit: Option<u32>,
        /// Field to sort by.
        #[arg(long)]
        sort_by: Option<String>,
    },
    /// Show one job.
    Describe {
        /// Project and region.
        #[command(flatten)]
        scope: Scope,
        /// Job ID.
        job_id: String,
    },
    /// Cancel a running job.
    Cancel {
        /// Project and region.
        #[command(flatten)]
        scope: Scope,
        /// Job ID.
        job_id: String,
    },
    /// Submit a job to a cluster.
    Submit {
        /// Project and region.
        #[command(flatten)]
        scope: Scope,
        /// Target cluster.
        #[arg(long)]
        cluster: String,
        /// Job property as KEY=VALUE (repeatable).
        #[arg(long = "property", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        properties: Vec<(String, String)>,
        /// Job label as KEY=VALUE (repeatable).
        #[arg(long = "label", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        labels: Vec<(String, String)>,
        /// Job kind.
        #[command(subcommand)]
        kind: SubmitKind,
    },
}

/// Job kinds accepted by `submit`.
#[derive(Debug, Subcommand)]
pub enum SubmitKind {
    /// Spark job from a main class.
    Spark {
        /// Driver main class.
        #[arg(long = "class")]
        main_class: String,
        /// Extra jars, comma separated.
        #[arg(long, value_delimiter = ',')]
        jars: Vec<String>,
        /// Driver arguments after `--`.
        #[arg(last = true)]
        args: Vec<String>,
    },
    /// `PySpark` job from a Python file.
    Pyspark {
        /// Driver Python file.
        main_file: String,
        /// Extra Python files, comma separated.
        #[arg(long, value_delimiter = ',')]
        py_files: Vec<String>,
        /// Driver arguments after `--`.
        #[arg(last = true)]
        args: Vec<String>,
    },
    /// Hadoop job from a jar.
    Hadoop {
        /// Jar containing the main class.
        #[arg(long)]
        jar: String,
        /// Driver arguments after `--`.
        #[arg(last = true)]
        args: Vec<String>,
    },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}
