//! Pipeline State Value Object
//!
//! NotStarted -> Compiled -> Archived -> Linked, with Failed reachable from
//! any non-terminal state. There is no retry or rollback edge.

use std::fmt;

use serde::Serialize;

use super::StageKind;
use crate::error::PipelineStateError;

/// Progress of one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    #[default]
    NotStarted,
    Compiled,
    Archived,
    Linked,
    Failed,
}

impl PipelineState {
    /// Record that `stage` completed successfully.
    pub fn advance(self, stage: StageKind) -> Result<Self, PipelineStateError> {
        match (self, stage) {
            (PipelineState::NotStarted, StageKind::Compile) => Ok(PipelineState::Compiled),
            (PipelineState::Compiled, StageKind::Archive) => Ok(PipelineState::Archived),
            (PipelineState::Archived, StageKind::Link) => Ok(PipelineState::Linked),
            (state, _) if state.is_terminal() => Err(PipelineStateError::AlreadyTerminal(state)),
            (from, stage) => Err(PipelineStateError::OutOfOrder { from, stage }),
        }
    }

    /// Record a stage failure.
    pub fn fail(self) -> Result<Self, PipelineStateError> {
        if self.is_terminal() {
            return Err(PipelineStateError::AlreadyTerminal(self));
        }
        Ok(PipelineState::Failed)
    }

    /// Stage that has to run next, if any
    pub fn next_stage(self) -> Option<StageKind> {
        match self {
            PipelineState::NotStarted => Some(StageKind::Compile),
            PipelineState::Compiled => Some(StageKind::Archive),
            PipelineState::Archived => Some(StageKind::Link),
            PipelineState::Linked | PipelineState::Failed => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Linked | PipelineState::Failed)
    }

    pub fn is_success(self) -> bool {
        self == PipelineState::Linked
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::NotStarted => "not started",
            PipelineState::Compiled => "compiled",
            PipelineState::Archived => "archived",
            PipelineState::Linked => "linked",
            PipelineState::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_linked() {
        let state = PipelineState::default()
            .advance(StageKind::Compile)
            .and_then(|s| s.advance(StageKind::Archive))
            .and_then(|s| s.advance(StageKind::Link))
            .unwrap();

        assert_eq!(state, PipelineState::Linked);
        assert!(state.is_terminal());
        assert!(state.is_success());
    }

    #[test]
    fn archive_before_compile_is_rejected() {
        let err = PipelineState::NotStarted
            .advance(StageKind::Archive)
            .unwrap_err();
        assert_eq!(
            err,
            PipelineStateError::OutOfOrder {
                from: PipelineState::NotStarted,
                stage: StageKind::Archive
            }
        );
    }

    #[test]
    fn link_before_archive_is_rejected() {
        assert!(PipelineState::Compiled.advance(StageKind::Link).is_err());
    }

    #[test]
    fn failure_is_terminal() {
        let failed = PipelineState::Archived.fail().unwrap();
        assert_eq!(failed, PipelineState::Failed);
        assert_eq!(failed.next_stage(), None);
        assert_eq!(
            failed.advance(StageKind::Link),
            Err(PipelineStateError::AlreadyTerminal(PipelineState::Failed))
        );
        assert!(failed.fail().is_err());
    }

    #[test]
    fn linked_cannot_fail() {
        assert!(PipelineState::Linked.fail().is_err());
    }
}
