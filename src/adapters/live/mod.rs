//! Live adapters for real external interactions.

pub mod process;

pub use process::LiveProcessService;
