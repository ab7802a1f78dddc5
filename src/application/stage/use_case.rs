//! Stage Use Case
//!
//! Runs a single stage: announce, clear the stale output, verify inputs,
//! invoke the tool, and map its exit status onto the error taxonomy.

use std::path::PathBuf;

use crate::domain::ports::{FileSystem, ProcessRunner, StageEvent, StageEventSink};
use crate::domain::value_objects::Toolchain;
use crate::error::{BuildError, BuildResult};

use super::request::{ArchiveRequest, CompileRequest, LinkRequest, StageRequest};

/// Stage use case - executes one stage against the toolchain
pub struct StageUseCase<PR, FS>
where
    PR: ProcessRunner,
    FS: FileSystem,
{
    runner: PR,
    fs: FS,
    toolchain: Toolchain,
}

impl<PR, FS> StageUseCase<PR, FS>
where
    PR: ProcessRunner,
    FS: FileSystem,
{
    /// Create a new stage use case
    pub fn new(runner: PR, fs: FS, toolchain: Toolchain) -> Self {
        Self {
            runner,
            fs,
            toolchain,
        }
    }

    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    pub fn runner(&self) -> &PR {
        &self.runner
    }

    /// Compile one source unit into an object file
    pub fn compile(
        &self,
        request: &CompileRequest,
        events: &dyn StageEventSink,
    ) -> BuildResult<PathBuf> {
        self.execute(request, events)
    }

    /// Archive two object files, replacing whatever the archive held before
    pub fn archive(
        &self,
        request: &ArchiveRequest,
        events: &dyn StageEventSink,
    ) -> BuildResult<PathBuf> {
        self.execute(request, events)
    }

    /// Link two objects and an archive into an executable
    pub fn link(&self, request: &LinkRequest, events: &dyn StageEventSink) -> BuildResult<PathBuf> {
        self.execute(request, events)
    }

    /// Execute any stage request.
    ///
    /// The `Started` event is emitted before anything touches the disk, so a
    /// failure can always be attributed to the last announced stage.
    pub fn execute<R>(&self, request: &R, events: &dyn StageEventSink) -> BuildResult<PathBuf>
    where
        R: StageRequest + ?Sized,
    {
        let stage = request.stage();
        let inputs = request.inputs();
        let output = request.output();

        if let Some(aliased) = inputs
            .iter()
            .find(|input| self.fs.same_location(input.path(), output.path()))
        {
            return Err(BuildError::OutputAliasesInput {
                stage,
                path: aliased.path().to_path_buf(),
            });
        }

        events.on_event(StageEvent::Started {
            stage,
            inputs: inputs.iter().map(|a| a.path().to_path_buf()).collect(),
            output: output.path().to_path_buf(),
        });

        let result = self.run_checked(request, events);

        if events.wants_detailed_events() {
            match &result {
                Ok(path) => events.on_event(StageEvent::Succeeded {
                    stage,
                    output: path.clone(),
                }),
                Err(err) => events.on_event(StageEvent::Failed {
                    stage,
                    error: err.to_string(),
                }),
            }
        }

        result
    }

    fn run_checked<R>(&self, request: &R, events: &dyn StageEventSink) -> BuildResult<PathBuf>
    where
        R: StageRequest + ?Sized,
    {
        let stage = request.stage();
        let output = request.output();

        // A previous run's output must never stand in for this run's.
        self.fs
            .remove_if_exists(output.path())
            .map_err(|e| BuildError::StaleOutput {
                stage,
                path: output.path().to_path_buf(),
                message: e.to_string(),
            })?;

        for input in request.inputs() {
            if !self.fs.is_readable(input.path()) {
                return Err(BuildError::InputMissing {
                    stage,
                    kind: input.kind(),
                    path: input.into_path(),
                });
            }
        }

        let invocation = request.invocation(&self.toolchain);
        if events.wants_detailed_events() {
            events.on_event(StageEvent::ToolInvoked {
                stage,
                command: invocation.to_string(),
            });
        }

        let status = self
            .runner
            .run(&invocation)
            .map_err(|source| BuildError::ToolchainUnavailable {
                stage,
                program: invocation.program().to_string(),
                source,
            })?;

        if !status.is_success() {
            return Err(BuildError::ToolchainFailure {
                stage,
                program: invocation.program().to_string(),
                code: status.code,
            });
        }

        Ok(output.into_path())
    }
}
