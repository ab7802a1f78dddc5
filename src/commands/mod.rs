//! Command handlers for the linkchain binary

pub mod build;
pub mod doctor;
pub mod stage;

use std::path::{Path, PathBuf};

use anyhow::Result;

use linkchain::config::{self, Config, LoadedConfig, Verbosity};
use linkchain::presentation::output::{render_config_warning, render_error_json};
use linkchain::presentation::Cli;
use linkchain::{BuildError, ConfigError};

/// Settings shared by every command after config resolution
pub struct CommandContext {
    pub config: Config,
    /// File the config came from, if any
    pub config_source: Option<PathBuf>,
    pub json: bool,
    pub verbosity: Verbosity,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let loaded = match config::discover(cli.config.as_deref(), &cwd) {
            Ok(loaded) => loaded,
            // A broken project file must not change what a single stage does.
            Err(err) if cli.config.is_none() && cli.command.is_stage() => {
                eprintln!("linkchain: warning: {}; using default toolchain", err);
                LoadedConfig::defaults_with_env()
            }
            Err(err) => return Err(err.into()),
        };

        for warning in &loaded.warnings {
            eprintln!("{}", render_config_warning(warning));
        }

        let verbosity = cli.verbosity(loaded.config.output.verbosity);
        Ok(Self {
            config: loaded.config,
            config_source: loaded.source,
            json: cli.json,
            verbosity,
        })
    }

    /// Directory relative manifest paths resolve against
    pub fn config_dir(&self) -> &Path {
        self.config_source
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new(""))
    }
}

/// Exit status for an error that escaped a command
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(build) = err.downcast_ref::<BuildError>() {
        return build.exit_code();
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return linkchain::error::EXIT_ARGUMENT;
    }
    1
}

/// Report an error: a JSON event on stdout, or one line on stderr
pub fn print_error(err: &anyhow::Error, json: bool, code: i32) {
    if json {
        println!("{}", render_error_json(&err.to_string(), code));
    } else {
        eprintln!("linkchain: error: {}", err);
    }
}
