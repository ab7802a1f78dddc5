//! linkchain - a minimal compile, archive and link pipeline
//!
//! Drives the native C toolchain through three strictly sequential stages:
//! compile a source file into an object file, bundle two object files into a
//! static archive, and link objects plus the archive into an executable. Each
//! stage is one blocking subprocess; a failing stage aborts the pipeline and
//! surfaces the tool's exit status unchanged.
//!
//! ## Layers
//!
//! - `domain` - artifacts, stages, the pipeline state machine and ports
//! - `application` - stage, pipeline and doctor use cases
//! - `infrastructure` - subprocess runner, local file system, event sinks
//! - `presentation` - CLI parsing, dependency wiring, output rendering
//! - `config` - `linkchain.toml` and `LINKCHAIN_*` overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ArchiveRequest, BuildPipelineUseCase, BuildPlan, CompileRequest, LinkRequest,
    PipelineOutcome, StageUseCase,
};
pub use config::{Config, Verbosity};
pub use domain::entities::{Artifact, ArtifactKind};
pub use domain::value_objects::{PipelineState, StageKind, Toolchain};
pub use error::{BuildError, BuildResult, ConfigError};
