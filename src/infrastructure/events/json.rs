//! JSON Event Sink
//!
//! Outputs stage events as NDJSON for CI/automation consumption.

use crate::domain::ports::{StageEvent, StageEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Render one event as a JSON object
pub fn event_to_json(event: &StageEvent) -> serde_json::Value {
    match event {
        StageEvent::Started {
            stage,
            inputs,
            output,
        } => {
            let inputs: Vec<String> = inputs.iter().map(|p| p.display().to_string()).collect();
            serde_json::json!({
                "event": "stage_start",
                "stage": stage,
                "inputs": inputs,
                "output": output.display().to_string(),
            })
        }

        StageEvent::ToolInvoked { stage, command } => {
            serde_json::json!({
                "event": "tool_invoked",
                "stage": stage,
                "command": command,
            })
        }

        StageEvent::Succeeded { stage, output } => {
            serde_json::json!({
                "event": "stage_complete",
                "stage": stage,
                "output": output.display().to_string(),
            })
        }

        StageEvent::Failed { stage, error } => {
            serde_json::json!({
                "event": "stage_error",
                "stage": stage,
                "error": error,
            })
        }

        StageEvent::PipelineCompleted { state } => {
            let status = if state.is_success() {
                "success"
            } else {
                "failure"
            };
            serde_json::json!({
                "event": "complete",
                "command": "build",
                "status": status,
                "state": state,
            })
        }
    }
}

impl StageEventSink for JsonEventSink {
    fn on_event(&self, event: StageEvent) {
        self.write_event(event_to_json(&event));
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
