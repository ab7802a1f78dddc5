//! Error types for Linkchain
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::ArtifactKind;
use crate::domain::value_objects::{PipelineState, StageKind};

/// Result type alias for Linkchain operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Exit status used for argument errors (matches clap's usage errors)
pub const EXIT_ARGUMENT: i32 = 2;

/// Exit status used when a declared input is missing
pub const EXIT_INPUT_MISSING: i32 = 1;

/// Exit status used when a tool cannot be spawned at all
pub const EXIT_TOOL_UNAVAILABLE: i32 = 127;

/// Coarse error category, one per entry of the error taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    InputMissing,
    Toolchain,
    Io,
}

/// Main error type for pipeline stages
#[derive(Error, Debug)]
pub enum BuildError {
    /// Wrong number of positional arguments for a stage
    #[error("{stage}: expected {expected} arguments ({usage}), got {actual}")]
    ArgumentCount {
        stage: StageKind,
        expected: usize,
        actual: usize,
        usage: &'static str,
    },

    /// The output path names one of the stage's own inputs
    #[error("{stage}: output '{}' is also an input of this stage", path.display())]
    OutputAliasesInput { stage: StageKind, path: PathBuf },

    /// A build manifest section is malformed
    #[error("invalid build manifest: {message}")]
    InvalidManifest { message: String },

    /// A declared input does not exist or cannot be read
    #[error("{stage}: {kind} not found or unreadable: {}", path.display())]
    InputMissing {
        stage: StageKind,
        kind: ArtifactKind,
        path: PathBuf,
    },

    /// The toolchain ran and reported failure
    #[error("{stage}: '{program}' failed with {}", describe_status(*code))]
    ToolchainFailure {
        stage: StageKind,
        program: String,
        code: Option<i32>,
    },

    /// The toolchain could not be started
    #[error("{stage}: could not run '{program}': {source}")]
    ToolchainUnavailable {
        stage: StageKind,
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A stale output could not be cleared before running the tool
    #[error("{stage}: could not remove previous output {}: {message}", path.display())]
    StaleOutput {
        stage: StageKind,
        path: PathBuf,
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_status(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "termination by signal".to_string(),
    }
}

impl BuildError {
    /// Which taxonomy bucket this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            BuildError::ArgumentCount { .. }
            | BuildError::OutputAliasesInput { .. }
            | BuildError::InvalidManifest { .. } => ErrorCategory::Argument,
            BuildError::InputMissing { .. } => ErrorCategory::InputMissing,
            BuildError::ToolchainFailure { .. } | BuildError::ToolchainUnavailable { .. } => {
                ErrorCategory::Toolchain
            }
            BuildError::StaleOutput { .. } | BuildError::Io(_) => ErrorCategory::Io,
        }
    }

    /// Stage the error originated from, if any
    pub fn stage(&self) -> Option<StageKind> {
        match self {
            BuildError::ArgumentCount { stage, .. }
            | BuildError::OutputAliasesInput { stage, .. }
            | BuildError::InputMissing { stage, .. }
            | BuildError::ToolchainFailure { stage, .. }
            | BuildError::ToolchainUnavailable { stage, .. }
            | BuildError::StaleOutput { stage, .. } => Some(*stage),
            BuildError::InvalidManifest { .. } | BuildError::Io(_) => None,
        }
    }

    /// Process exit status that surfaces this error to the caller.
    ///
    /// Toolchain failures pass the tool's own status through unchanged.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::ToolchainFailure { code, .. } => match code {
                Some(code) if *code != 0 => *code,
                _ => 1,
            },
            BuildError::ToolchainUnavailable { .. } => EXIT_TOOL_UNAVAILABLE,
            BuildError::InputMissing { .. } => EXIT_INPUT_MISSING,
            BuildError::ArgumentCount { .. }
            | BuildError::OutputAliasesInput { .. }
            | BuildError::InvalidManifest { .. } => EXIT_ARGUMENT,
            BuildError::StaleOutput { .. } | BuildError::Io(_) => 1,
        }
    }
}

/// Rejected pipeline state transition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineStateError {
    #[error("cannot complete {stage} stage while pipeline is {from}")]
    OutOfOrder {
        from: PipelineState,
        stage: StageKind,
    },

    #[error("pipeline already finished as {0}")]
    AlreadyTerminal(PipelineState),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}
