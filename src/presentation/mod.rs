//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Rendering for errors, warnings and the doctor report
//!
//! ## Usage
//!
//! ```ignore
//! use linkchain::presentation::factory;
//!
//! let use_case = factory::create_stage_use_case(Toolchain::default(), false);
//! let object = use_case.compile(&request, &sink)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands};
pub use factory::{create_event_sink, create_pipeline_use_case, create_stage_use_case};
