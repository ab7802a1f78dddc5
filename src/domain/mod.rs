//! Domain Layer
//!
//! Pure pipeline logic: artifacts, stages, the pipeline state machine and the
//! exact command lines handed to the toolchain.
//!
//! ## Structure
//!
//! - `entities/` - Filesystem artifacts (source units, objects, archives, executables)
//! - `value_objects/` - Immutable value types (StageKind, PipelineState, Toolchain)
//! - `services/` - Command line construction for each stage
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the file system
//! 2. **Ports & Adapters** - Process spawning, file checks and progress output go through traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
