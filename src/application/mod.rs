//! Application Layer
//!
//! Use cases that coordinate domain logic with infrastructure ports.
//!
//! - `stage` - Runs one stage (compile, archive or link)
//! - `pipeline` - Runs a full build plan through the state machine
//! - `doctor` - Probes the configured toolchain

pub mod doctor;
pub mod pipeline;
pub mod stage;

pub use doctor::{check_toolchain, DoctorReport, ToolCheck};
pub use pipeline::{BuildPipelineUseCase, BuildPlan, PipelineOutcome};
pub use stage::{ArchiveRequest, CompileRequest, LinkRequest, StageRequest, StageUseCase};
