//! Toolchain Value Object
//!
//! Program names are configurable; the flag profile is not.

use serde::{Deserialize, Serialize};

/// Warning profile shared by compile and link
pub const WARNING_FLAGS: [&str; 2] = ["-Wall", "-Wextra"];

/// Language standard for compilation
pub const LANGUAGE_STANDARD: &str = "-std=c11";

/// Compile-only switch
pub const COMPILE_ONLY: &str = "-c";

/// Archiver mode: replace members, create if missing, write a symbol index
pub const ARCHIVE_MODE: &str = "rcs";

/// The external programs the pipeline drives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolchain {
    /// Compiler driver, also used for linking
    #[serde(default = "default_compiler")]
    pub cc: String,

    /// Static archiver
    #[serde(default = "default_archiver")]
    pub ar: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            cc: default_compiler(),
            ar: default_archiver(),
        }
    }
}

impl Toolchain {
    pub fn new(cc: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            cc: cc.into(),
            ar: ar.into(),
        }
    }
}

fn default_compiler() -> String {
    "cc".to_string()
}

fn default_archiver() -> String {
    "ar".to_string()
}
