//! Common test utilities for linkchain CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory plus helpers to run the binary
//! - Toolchain detection so real-compiler tests skip cleanly
//! - Assertion macros: `assert_artifact!`, `assert_no_artifact!`
//! - Fixtures: C sources for the end-to-end scenario

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;
pub mod toolchain;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
pub use toolchain::*;
