//! Domain Value Objects
//!
//! Immutable value types that represent pipeline concepts.

mod config_warning;
mod pipeline_state;
mod stage;
mod toolchain;

pub use config_warning::ConfigWarning;
pub use pipeline_state::PipelineState;
pub use stage::StageKind;
pub use toolchain::{Toolchain, ARCHIVE_MODE, COMPILE_ONLY, LANGUAGE_STANDARD, WARNING_FLAGS};
