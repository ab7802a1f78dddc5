//! Toolchain doctor
//!
//! Reports whether the configured compiler and archiver can be spawned.

use serde::Serialize;

use crate::domain::ports::ProcessRunner;
use crate::domain::value_objects::Toolchain;

/// Availability of one toolchain program
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCheck {
    /// Role in the pipeline ("compiler", "archiver")
    pub role: &'static str,
    pub program: String,
    pub available: bool,
}

/// Result of probing the toolchain
#[derive(Debug, Clone, Default, Serialize)]
pub struct DoctorReport {
    pub checks: Vec<ToolCheck>,
}

impl DoctorReport {
    pub fn is_healthy(&self) -> bool {
        self.checks.iter().all(|c| c.available)
    }

    pub fn missing(&self) -> impl Iterator<Item = &ToolCheck> {
        self.checks.iter().filter(|c| !c.available)
    }
}

/// Probe the compiler (also the linker driver) and the archiver
pub fn check_toolchain<PR: ProcessRunner>(runner: &PR, toolchain: &Toolchain) -> DoctorReport {
    let probe = |role: &'static str, program: &str| ToolCheck {
        role,
        program: program.to_string(),
        available: runner.is_available(program),
    };

    DoctorReport {
        checks: vec![
            probe("compiler", &toolchain.cc),
            probe("archiver", &toolchain.ar),
        ],
    }
}
