//! Console Event Sink
//!
//! Human-readable progress: one `[stage] inputs -> output` line on stdout per
//! stage, plus stderr detail at higher verbosity.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::ports::{StageEvent, StageEventSink};

/// Event sink that renders progress lines for terminals and logs
pub struct ConsoleEventSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    verbosity: Verbosity,
}

impl ConsoleEventSink {
    /// Progress to stdout, detail to stderr
    pub fn stdio(verbosity: Verbosity) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), verbosity)
    }

    /// Create a console sink over custom writers (for testing)
    pub fn with_writers<O, E>(out: O, err: E, verbosity: Verbosity) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            verbosity,
        }
    }

    // Flushed immediately: the tool inherits the same stdout and must not
    // overtake the progress line.
    fn write_out(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }

    fn write_err(&self, line: &str) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{}", line);
            let _ = err.flush();
        }
    }
}

impl StageEventSink for ConsoleEventSink {
    fn on_event(&self, event: StageEvent) {
        match &event {
            StageEvent::Started { .. } => {
                if self.verbosity != Verbosity::Quiet {
                    if let Some(line) = event.progress_line() {
                        self.write_out(&line);
                    }
                }
            }
            StageEvent::ToolInvoked { command, .. } => {
                if self.verbosity == Verbosity::Debug {
                    self.write_err(&format!("  $ {}", command));
                }
            }
            StageEvent::Succeeded { stage, output } => {
                if self.verbosity.is_verbose() {
                    self.write_err(&format!("  {} ok: {}", stage, output.display()));
                }
            }
            StageEvent::Failed { stage, error } => {
                if self.verbosity.is_verbose() {
                    self.write_err(&format!("  {} failed: {}", stage, error));
                }
            }
            StageEvent::PipelineCompleted { state } => {
                if self.verbosity.is_verbose() {
                    self.write_err(&format!("pipeline {}", state));
                }
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity.is_verbose()
    }
}
