//! Command construction and response decoding for `gcloud dataproc jobs`.
//!
//! [`command`] and [`decode`] are pure; [`executor`] joins them through a
//! [`ProcessService`](crate::ports::ProcessService).

pub mod command;
pub mod decode;
pub mod executor;
pub mod request;

pub use executor::GcloudExecutor;
pub use request::{JobKind, JobQuery, JobRef, JobSubmission};
