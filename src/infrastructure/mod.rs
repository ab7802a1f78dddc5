//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Event sinks (console progress, NDJSON)
//! - `fs/` - File system implementation
//! - `process/` - Subprocess runner for the native toolchain

pub mod events;
pub mod fs;
pub mod process;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use process::SystemProcessRunner;
