//! Stage Event Port
//!
//! Provides an observable interface for stage execution.
//! The `[stage] inputs -> output` progress line is rendered from `Started`.

use std::path::PathBuf;

use crate::domain::value_objects::{PipelineState, StageKind};

/// Event emitted while running stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEvent {
    /// Stage is about to act; always emitted before any file check or tool run
    Started {
        stage: StageKind,
        inputs: Vec<PathBuf>,
        output: PathBuf,
    },

    /// The tool is about to be spawned with this command line
    ToolInvoked { stage: StageKind, command: String },

    /// Stage produced its output
    Succeeded { stage: StageKind, output: PathBuf },

    /// Stage aborted
    Failed { stage: StageKind, error: String },

    /// A full pipeline run reached a terminal state
    PipelineCompleted { state: PipelineState },
}

impl StageEvent {
    /// The advisory progress line for a `Started` event
    pub fn progress_line(&self) -> Option<String> {
        match self {
            StageEvent::Started {
                stage,
                inputs,
                output,
            } => {
                let inputs: Vec<String> = inputs.iter().map(|p| p.display().to_string()).collect();
                Some(format!(
                    "[{}] {} -> {}",
                    stage,
                    inputs.join(" "),
                    output.display()
                ))
            }
            _ => None,
        }
    }
}

/// Trait for receiving stage events
///
/// Implementations can be:
/// - ConsoleEventSink: progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait StageEventSink {
    /// Handle a stage event
    fn on_event(&self, event: StageEvent);

    /// Check if this sink wants success/failure events in addition to `Started`
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

impl<T: StageEventSink + ?Sized> StageEventSink for &T {
    fn on_event(&self, event: StageEvent) {
        (**self).on_event(event)
    }

    fn wants_detailed_events(&self) -> bool {
        (**self).wants_detailed_events()
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl StageEventSink for NoopEventSink {
    fn on_event(&self, _event: StageEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
