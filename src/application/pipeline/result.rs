//! Pipeline result types

use crate::domain::entities::Artifact;
use crate::domain::value_objects::PipelineState;
use crate::error::BuildError;

/// Result of a full pipeline run
#[derive(Debug, Default)]
pub struct PipelineOutcome {
    /// Terminal state reached
    pub state: PipelineState,
    /// Outputs written by successful stages, in execution order
    pub produced: Vec<Artifact>,
    /// The error that aborted the run
    pub error: Option<BuildError>,
}

impl PipelineOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the run reached `Linked`
    pub fn is_success(&self) -> bool {
        self.state.is_success() && self.error.is_none()
    }

    /// The final executable, once linked
    pub fn executable(&self) -> Option<&Artifact> {
        if self.is_success() {
            self.produced.last()
        } else {
            None
        }
    }

    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        self.error.as_ref().map_or(0, BuildError::exit_code)
    }
}
