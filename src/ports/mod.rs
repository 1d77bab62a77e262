//! Port traits defining external boundaries.
//!
//! The only boundary this crate crosses is process execution. Implementations
//! live in `src/adapters/`.

pub mod process;

pub use process::{Command, ProcessResult, ProcessService};
