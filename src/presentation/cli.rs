//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Stage subcommands take their paths as a plain list; the arity is checked
//! by the stage request (`from_args`) so a wrong count maps to exit code 2
//! with the stage's own usage text.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Verbosity;

/// linkchain - compile, archive and link C sources with the native toolchain
#[derive(Parser, Debug)]
#[command(name = "linkchain")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of progress lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress lines
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file (default: ./linkchain.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile one C source file into an object file
    #[command(override_usage = "linkchain compile <source-path> <object-output-path>")]
    Compile {
        /// Source file, then object file
        #[arg(value_name = "PATH", num_args = 0..)]
        paths: Vec<PathBuf>,
    },

    /// Bundle exactly two object files into a static archive
    #[command(override_usage = "linkchain archive <object1-path> <object2-path> <archive-output-path>")]
    Archive {
        /// Two object files, then the archive
        #[arg(value_name = "PATH", num_args = 0..)]
        paths: Vec<PathBuf>,
    },

    /// Link two object files and an archive into an executable
    #[command(override_usage = "linkchain link <object1-path> <object2-path> <archive-path> <executable-output-path>")]
    Link {
        /// Two object files, the archive, then the executable
        #[arg(value_name = "PATH", num_args = 0..)]
        paths: Vec<PathBuf>,
    },

    /// Run compile, archive and link from the [build] section of a manifest
    Build {
        /// Manifest with a [build] section (default: the loaded config)
        #[arg(short, long, value_name = "PATH")]
        manifest: Option<PathBuf>,
    },

    /// Check that the configured compiler and archiver can be run
    Doctor,
}

impl Commands {
    /// Single-stage commands, whose contract does not depend on configuration
    pub fn is_stage(&self) -> bool {
        matches!(
            self,
            Commands::Compile { .. } | Commands::Archive { .. } | Commands::Link { .. }
        )
    }
}

impl Cli {
    /// Effective verbosity: CLI flags over the configured level
    pub fn verbosity(&self, configured: Verbosity) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            configured.raised_by(self.verbose)
        }
    }
}
