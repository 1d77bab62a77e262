//! Replays recorded executions from a cassette.

use std::collections::VecDeque;

use super::format::{Cassette, Execution};
use crate::ports::process::Command;

/// Serves recorded executions in order.
///
/// Each requested command must equal the recorded one.
#[derive(Debug)]
pub struct CassetteReplayer {
    remaining: VecDeque<Execution>,
}

impl CassetteReplayer {
    /// Create a replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        Self { remaining: cassette.executions.iter().cloned().collect() }
    }

    /// Return the next execution for `command`.
    ///
    /// # Errors
    ///
    /// Returns an error message when the cassette is exhausted or when
    /// `command` differs from the recorded one. A mismatched execution is not
    /// consumed.
    pub fn next_execution(&mut self, command: &Command) -> Result<Execution, String> {
        let next = self.remaining.front().ok_or_else(|| {
            format!("Cassette exhausted: no recorded execution left for `{command}`")
        })?;

        if next.command != *command {
            return Err(format!(
                "Cassette mismatch at seq={}: expected `{}`, got `{command}`",
                next.seq, next.command
            ));
        }

        self.remaining.pop_front().ok_or_else(|| "Cassette exhausted".to_string())
    }
}
