//! Adapters implementing [`ProcessService`](crate::ports::ProcessService).

pub mod live;
pub mod recording;
pub mod replaying;

pub use live::LiveProcessService;
pub use recording::RecordingProcessService;
pub use replaying::ReplayingProcessService;
