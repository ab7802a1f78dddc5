//! Stage Use Case
//!
//! Executes the compile, archive and link stages.
//!
//! This module handles:
//! - Parsing positional arguments into typed requests
//! - Emitting the advisory progress line before acting
//! - Clearing stale outputs and verifying inputs
//! - Mapping the toolchain's exit status onto `BuildError`

mod request;
mod use_case;


pub use request::{ArchiveRequest, CompileRequest, LinkRequest, StageRequest};
pub use use_case::StageUseCase;
