//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod process_runner;
pub mod stage_events;

pub use file_system::{FileSystem, FsError, FsResult};
pub use process_runner::{ProcessRunner, ToolInvocation, ToolStatus};
pub use stage_events::{NoopEventSink, StageEvent, StageEventSink};
