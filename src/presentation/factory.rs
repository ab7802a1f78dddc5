//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{BuildPipelineUseCase, StageUseCase};
use crate::config::Verbosity;
use crate::domain::ports::StageEventSink;
use crate::domain::value_objects::Toolchain;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs, SystemProcessRunner};

/// Type alias for the concrete StageUseCase with all dependencies
pub type ConcreteStageUseCase = StageUseCase<SystemProcessRunner, LocalFs>;

/// Type alias for the concrete BuildPipelineUseCase with all dependencies
pub type ConcretePipelineUseCase = BuildPipelineUseCase<SystemProcessRunner, LocalFs>;

/// Create a single-stage use case driving the real toolchain.
///
/// With `json`, tool stdout is moved to stderr so stdout stays pure NDJSON.
pub fn create_stage_use_case(toolchain: Toolchain, json: bool) -> ConcreteStageUseCase {
    let runner = if json {
        SystemProcessRunner::with_stdout_on_stderr()
    } else {
        SystemProcessRunner::new()
    };
    StageUseCase::new(runner, LocalFs::new(), toolchain)
}

/// Create a full pipeline use case driving the real toolchain
pub fn create_pipeline_use_case(toolchain: Toolchain, json: bool) -> ConcretePipelineUseCase {
    BuildPipelineUseCase::new(create_stage_use_case(toolchain, json))
}

/// Pick the event sink for this invocation
pub fn create_event_sink(json: bool, verbosity: Verbosity) -> Box<dyn StageEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdio(verbosity))
    }
}
