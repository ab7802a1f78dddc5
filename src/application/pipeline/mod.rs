//! Build Pipeline Use Case
//!
//! Orchestrates a complete compile -> archive -> link run.
//!
//! This module handles:
//! - Turning a `[build]` manifest section into a fixed plan
//! - Running stages strictly in order, each blocking until its tool exits
//! - Tracking the pipeline state machine and the first failure

mod plan;
mod result;
mod use_case;


pub use plan::BuildPlan;
pub use result::PipelineOutcome;
pub use use_case::BuildPipelineUseCase;
