//! Stage requests
//!
//! One small struct of paths per stage. `from_args` enforces the positional
//! argument count of the command surface.

use std::path::{Path, PathBuf};

use crate::domain::entities::Artifact;
use crate::domain::ports::ToolInvocation;
use crate::domain::services::{archive_invocation, compile_invocation, link_invocation};
use crate::domain::value_objects::{StageKind, Toolchain};
use crate::error::{BuildError, BuildResult};

/// What a stage consumes, produces and runs
pub trait StageRequest {
    fn stage(&self) -> StageKind;

    /// Declared inputs, in command-line order
    fn inputs(&self) -> Vec<Artifact>;

    fn output(&self) -> Artifact;

    fn invocation(&self, toolchain: &Toolchain) -> ToolInvocation;
}

fn expect_arity(stage: StageKind, args: &[PathBuf]) -> BuildResult<()> {
    if args.len() != stage.arity() {
        return Err(BuildError::ArgumentCount {
            stage,
            expected: stage.arity(),
            actual: args.len(),
            usage: stage.usage(),
        });
    }
    Ok(())
}

/// source -> object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileRequest {
    pub source: PathBuf,
    pub object: PathBuf,
}

impl CompileRequest {
    pub fn new(source: impl Into<PathBuf>, object: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            object: object.into(),
        }
    }

    /// Parse `<source-path> <object-output-path>`
    pub fn from_args(args: &[PathBuf]) -> BuildResult<Self> {
        expect_arity(StageKind::Compile, args)?;
        Ok(Self::new(&args[0], &args[1]))
    }
}

impl StageRequest for CompileRequest {
    fn stage(&self) -> StageKind {
        StageKind::Compile
    }

    fn inputs(&self) -> Vec<Artifact> {
        vec![Artifact::source(&self.source)]
    }

    fn output(&self) -> Artifact {
        Artifact::object(&self.object)
    }

    fn invocation(&self, toolchain: &Toolchain) -> ToolInvocation {
        compile_invocation(toolchain, &self.source, &self.object)
    }
}

/// two objects -> archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRequest {
    pub objects: [PathBuf; 2],
    pub archive: PathBuf,
}

impl ArchiveRequest {
    pub fn new(
        first: impl Into<PathBuf>,
        second: impl Into<PathBuf>,
        archive: impl Into<PathBuf>,
    ) -> Self {
        Self {
            objects: [first.into(), second.into()],
            archive: archive.into(),
        }
    }

    /// Parse `<object1-path> <object2-path> <archive-output-path>`
    pub fn from_args(args: &[PathBuf]) -> BuildResult<Self> {
        expect_arity(StageKind::Archive, args)?;
        Ok(Self::new(&args[0], &args[1], &args[2]))
    }

    fn object_refs(&self) -> [&Path; 2] {
        [&self.objects[0], &self.objects[1]]
    }
}

impl StageRequest for ArchiveRequest {
    fn stage(&self) -> StageKind {
        StageKind::Archive
    }

    fn inputs(&self) -> Vec<Artifact> {
        self.objects.iter().map(Artifact::object).collect()
    }

    fn output(&self) -> Artifact {
        Artifact::archive(&self.archive)
    }

    fn invocation(&self, toolchain: &Toolchain) -> ToolInvocation {
        archive_invocation(toolchain, &self.object_refs(), &self.archive)
    }
}

/// two objects + archive -> executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    pub objects: [PathBuf; 2],
    pub archive: PathBuf,
    pub executable: PathBuf,
}

impl LinkRequest {
    pub fn new(
        first: impl Into<PathBuf>,
        second: impl Into<PathBuf>,
        archive: impl Into<PathBuf>,
        executable: impl Into<PathBuf>,
    ) -> Self {
        Self {
            objects: [first.into(), second.into()],
            archive: archive.into(),
            executable: executable.into(),
        }
    }

    /// Parse `<object1-path> <object2-path> <archive-path> <executable-output-path>`
    pub fn from_args(args: &[PathBuf]) -> BuildResult<Self> {
        expect_arity(StageKind::Link, args)?;
        Ok(Self::new(&args[0], &args[1], &args[2], &args[3]))
    }
}

impl StageRequest for LinkRequest {
    fn stage(&self) -> StageKind {
        StageKind::Link
    }

    fn inputs(&self) -> Vec<Artifact> {
        let mut inputs: Vec<Artifact> = self.objects.iter().map(Artifact::object).collect();
        inputs.push(Artifact::archive(&self.archive));
        inputs
    }

    fn output(&self) -> Artifact {
        Artifact::executable(&self.executable)
    }

    fn invocation(&self, toolchain: &Toolchain) -> ToolInvocation {
        link_invocation(
            toolchain,
            &[&self.objects[0], &self.objects[1]],
            &self.archive,
            &self.executable,
        )
    }
}
