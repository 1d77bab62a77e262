//! Live process execution using `std::process::Command`.

use std::process;

use tracing::debug;

use crate::ports::process::{Command, ProcessResult, ProcessService};

/// Spawns the program directly, without a shell, and waits for it to exit.
pub struct LiveProcessService;

impl ProcessService for LiveProcessService {
    fn execute_for_output(
        &self,
        command: &Command,
    ) -> Result<ProcessResult, Box<dyn std::error::Error + Send + Sync>> {
        let output = process::Command::new(command.program()).args(command.args()).output()?;
        let exit_code = output.status.code().unwrap_or(-1);
        debug!(program = command.program(), exit_code, "process exited");
        Ok(ProcessResult {
            exit_code,
            output: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout() {
        let result = LiveProcessService
            .execute_for_output(&Command::new("echo", ["hello", "world"]))
            .unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(result.output.trim(), "hello world");
        assert!(result.stderr.is_empty());
    }

    #[test]
    fn arguments_are_not_shell_interpreted() {
        let result =
            LiveProcessService.execute_for_output(&Command::new("echo", ["$HOME;ls"])).unwrap();
        assert_eq!(result.output.trim(), "$HOME;ls");
    }

    #[test]
    fn captures_exit_code() {
        let result =
            LiveProcessService.execute_for_output(&Command::new("sh", ["-c", "exit 42"])).unwrap();
        assert_eq!(result.exit_code, 42);
    }

    #[test]
    fn missing_program_is_an_error() {
        let result = LiveProcessService
            .execute_for_output(&Command::new("gcloud-jobs-definitely-missing", ["x"]));
        assert!(result.is_err());
    }
}
