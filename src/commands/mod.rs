//! Command dispatch and handlers.

pub mod cancel;
pub mod describe;
pub mod list;
pub mod output;
pub mod submit;

use std::env;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::cli::{Cli, Command};
use crate::config::GcloudConfig;
use crate::context::ServiceContext;
use crate::gcloud::GcloudExecutor;

/// Environment variable naming a cassette file to record executions into.
pub const RECORD_VAR: &str = "GCLOUD_JOBS_RECORD";
/// Environment variable naming a cassette file to replay executions from.
pub const REPLAY_VAR: &str = "GCLOUD_JOBS_REPLAY";

/// Dispatch a parsed command to its handler.
///
/// When `GCLOUD_JOBS_REPLAY` is set, executions are served from that
/// cassette instead of running gcloud. When `GCLOUD_JOBS_RECORD` is set, all
/// executions are recorded to that cassette file.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let ctx = if let Ok(path) = env::var(REPLAY_VAR) {
        ServiceContext::replaying(&PathBuf::from(path))?
    } else if let Ok(path) = env::var(RECORD_VAR) {
        ServiceContext::recording(&PathBuf::from(path))
    } else {
        ServiceContext::live()
    };

    let config = resolve_config(cli, GcloudConfig::from_env());
    let result = dispatch_with_context(cli, &ctx, config);

    // Finish recording after command completes (even on error)
    finish_session(ctx, result)
}

/// Finish the session, keeping the command's own error when both fail.
fn finish_session(ctx: ServiceContext, result: Result<(), String>) -> Result<(), String> {
    match ctx.finish() {
        Ok(Some(path)) => {
            info!(path = %path.display(), "recording saved");
            result
        }
        Ok(None) => result,
        Err(finish_err) if result.is_err() => {
            warn!(error = %finish_err, "failed to save recording");
            result
        }
        Err(finish_err) => Err(finish_err),
    }
}

/// Apply command-line overrides on top of environment configuration.
fn resolve_config(cli: &Cli, mut config: GcloudConfig) -> GcloudConfig {
    if let Some(binary) = &cli.binary {
        config.binary.clone_from(binary);
    }
    if cli.account.is_some() {
        config.account.clone_from(&cli.account);
    }
    if cli.configuration.is_some() {
        config.configuration.clone_from(&cli.configuration);
    }
    config
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    cli: &Cli,
    ctx: &ServiceContext,
    config: GcloudConfig,
) -> Result<(), String> {
    let executor = GcloudExecutor::with_config(ctx.process.as_ref(), config);
    let format = cli.output;
    match &cli.command {
        Command::List { scope, filters, limit, sort_by } => {
            list::run(&executor, scope, filters, *limit, sort_by.as_deref(), format)
        }
        Command::Describe { scope, job_id } => describe::run(&executor, scope, job_id, format),
        Command::Cancel { scope, job_id } => cancel::run(&executor, scope, job_id, format),
        Command::Submit { scope, cluster, properties, labels, kind } => {
            let request = submit::Request { scope, cluster, properties, labels, kind };
            submit::run(&executor, &request, format)
        }
    }
}
