//! Build Pipeline Use Case
//!
//! Drives compile -> archive -> link through the pipeline state machine.
//! The first failing stage aborts the run; nothing is retried.

use crate::application::stage::{StageRequest, StageUseCase};
use crate::domain::entities::Artifact;
use crate::domain::ports::{FileSystem, ProcessRunner, StageEvent, StageEventSink};
use crate::domain::value_objects::{PipelineState, StageKind};
use crate::error::BuildResult;

use super::plan::BuildPlan;
use super::result::PipelineOutcome;

/// Build pipeline use case - runs every stage of a plan in order
pub struct BuildPipelineUseCase<PR, FS>
where
    PR: ProcessRunner,
    FS: FileSystem,
{
    stages: StageUseCase<PR, FS>,
}

impl<PR, FS> BuildPipelineUseCase<PR, FS>
where
    PR: ProcessRunner,
    FS: FileSystem,
{
    /// Create a new pipeline use case
    pub fn new(stages: StageUseCase<PR, FS>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &StageUseCase<PR, FS> {
        &self.stages
    }

    /// Execute the plan.
    ///
    /// Every compile unit runs before the pipeline counts as `Compiled`.
    pub fn run(&self, plan: &BuildPlan, events: &dyn StageEventSink) -> PipelineOutcome {
        let mut outcome = PipelineOutcome::new();
        let mut state = PipelineState::NotStarted;

        while let Some(stage) = state.next_stage() {
            let step = match stage {
                StageKind::Compile => self.run_all(&plan.compile, events, &mut outcome),
                StageKind::Archive => self.run_all([&plan.archive], events, &mut outcome),
                StageKind::Link => self.run_all([&plan.link], events, &mut outcome),
            };

            // `next_stage` only yields legal transitions, so a rejected one
            // can only mean the run is already over.
            state = match step {
                Ok(()) => state.advance(stage).unwrap_or(PipelineState::Failed),
                Err(err) => {
                    outcome.error = Some(err);
                    state.fail().unwrap_or(PipelineState::Failed)
                }
            };
        }

        outcome.state = state;
        events.on_event(StageEvent::PipelineCompleted { state });
        outcome
    }

    fn run_all<I, R>(
        &self,
        requests: I,
        events: &dyn StageEventSink,
        outcome: &mut PipelineOutcome,
    ) -> BuildResult<()>
    where
        I: IntoIterator<Item = R>,
        R: std::ops::Deref,
        R::Target: StageRequest,
    {
        for request in requests {
            let kind = request.output().kind();
            let path = self.stages.execute(&*request, events)?;
            outcome.produced.push(Artifact::new(kind, path));
        }
        Ok(())
    }
}
