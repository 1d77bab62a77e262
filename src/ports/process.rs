//! Process execution port for running the external tool.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An argument vector: the program followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    program: String,
    args: Vec<String>,
}

impl Command {
    /// Create a command for the given program with the given arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }

    /// The program to run.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program, in order.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether any argument equals `token` exactly.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.args.iter().any(|arg| arg == token)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(|c: char| c.is_whitespace() || c == '\'') {
                write!(f, " '{}'", arg.replace('\'', r"'\''"))?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// The outcome of one process execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// The exit code of the process.
    pub exit_code: i32,
    /// The captured standard output.
    pub output: String,
    /// The captured standard error.
    #[serde(default)]
    pub stderr: String,
}

/// Runs external processes to completion.
///
/// Implementations block until the process exits and its output has been
/// fully captured.
pub trait ProcessService: Send + Sync {
    /// Runs `command` and returns its exit code and captured output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or its output cannot
    /// be collected. A non-zero exit code is not an error at this level.
    fn execute_for_output(
        &self,
        command: &Command,
    ) -> Result<ProcessResult, Box<dyn std::error::Error + Send + Sync>>;
}
