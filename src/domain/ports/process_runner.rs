//! Process Runner Port
//!
//! The single seam through which the pipeline reaches the native toolchain.
//! Infrastructure provides the real subprocess implementation; tests provide
//! recording fakes.

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

/// A fully formed tool command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    program: String,
    args: Vec<OsString>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a flag or literal argument
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a path argument
    pub fn path(self, path: &Path) -> Self {
        self.arg(path.as_os_str().to_os_string())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// How a tool process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ToolStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success() -> Self {
        Self::from_code(0)
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs toolchain programs to completion.
///
/// Implementations must block until the process exits and must not reformat
/// the tool's own diagnostics.
pub trait ProcessRunner {
    /// Run the invocation and report its exit status.
    ///
    /// An `Err` means the process could not be started at all.
    fn run(&self, invocation: &ToolInvocation) -> std::io::Result<ToolStatus>;

    /// Check whether `program` can be spawned (used by `doctor`).
    fn is_available(&self, program: &str) -> bool;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn run(&self, invocation: &ToolInvocation) -> std::io::Result<ToolStatus> {
        (**self).run(invocation)
    }

    fn is_available(&self, program: &str) -> bool {
        (**self).is_available(program)
    }
}
