//! Configuration module for linkchain
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LINKCHAIN_*)
//! 3. Project config (`linkchain.toml` or `--config <path>`)
//! 4. User config (`~/.config/linkchain/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    discover, user_config_path, with_env_overrides_from, LoadedConfig, CONFIG_HOME_VAR,
    PROJECT_CONFIG_FILE,
};
pub use types::{
    ArchiveConfig, BuildConfig, CompileUnitConfig, Config, LinkConfig, OutputConfig, Verbosity,
};
