//! Executor configuration.
//!
//! Everything the executor would otherwise pick up from ambient gcloud state
//! is passed in explicitly.

use std::env;

/// Environment variable naming the gcloud binary.
pub const BINARY_VAR: &str = "GCLOUD_JOBS_BINARY";
/// Environment variable naming the account to run as.
pub const ACCOUNT_VAR: &str = "GCLOUD_JOBS_ACCOUNT";
/// Environment variable naming the gcloud named configuration.
pub const CONFIGURATION_VAR: &str = "GCLOUD_JOBS_CONFIGURATION";

/// Default program name, resolved through `PATH`.
pub const DEFAULT_BINARY: &str = "gcloud";

/// Tool path and global context for every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcloudConfig {
    /// Program to invoke.
    pub binary: String,
    /// Rendered as `--account=<value>` when set.
    pub account: Option<String>,
    /// Rendered as `--configuration=<value>` when set.
    pub configuration: Option<String>,
}

impl Default for GcloudConfig {
    fn default() -> Self {
        Self { binary: DEFAULT_BINARY.to_string(), account: None, configuration: None }
    }
}

impl GcloudConfig {
    /// Creates a configuration for the given binary with no global context.
    pub fn new(binary: impl Into<String>) -> Self {
        Self { binary: binary.into(), ..Self::default() }
    }

    /// Sets the account to run as.
    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Sets the named gcloud configuration.
    #[must_use]
    pub fn with_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    /// Reads configuration from the process environment.
    ///
    /// Unset or blank variables fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            binary: non_blank(BINARY_VAR).unwrap_or_else(|| DEFAULT_BINARY.to_string()),
            account: non_blank(ACCOUNT_VAR),
            configuration: non_blank(CONFIGURATION_VAR),
        }
    }
}
