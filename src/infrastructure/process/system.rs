//! System process runner
//!
//! Spawns toolchain programs found on `PATH`. The child inherits stdout and
//! stderr so compiler diagnostics reach the user unmodified. When linkchain's
//! own stdout carries NDJSON, the child's stdout is sent to stderr instead.

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::{ProcessRunner, ToolInvocation, ToolStatus};

/// Runs tools as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner {
    stdout_to_stderr: bool,
}

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner whose children write their stdout to our stderr
    pub fn with_stdout_on_stderr() -> Self {
        Self {
            stdout_to_stderr: true,
        }
    }

    fn child_stdout(&self) -> Stdio {
        if self.stdout_to_stderr {
            Stdio::from(io::stderr())
        } else {
            Stdio::inherit()
        }
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, invocation: &ToolInvocation) -> std::io::Result<ToolStatus> {
        let status = Command::new(invocation.program())
            .args(invocation.args())
            .stdin(Stdio::null())
            .stdout(self.child_stdout())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(ToolStatus {
            code: status.code(),
        })
    }

    fn is_available(&self, program: &str) -> bool {
        Command::new(program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }
}
