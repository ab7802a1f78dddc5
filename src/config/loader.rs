//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::ConfigError;

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, Verbosity};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "linkchain.toml";

/// Overrides the user config directory (tests point this at a temp dir)
pub const CONFIG_HOME_VAR: &str = "LINKCHAIN_CONFIG_HOME";

/// A resolved configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// File the config was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// Built-in defaults with environment overrides, ignoring every file
    pub fn defaults_with_env() -> Self {
        Self {
            config: with_env_overrides(Config::default()),
            ..Self::default()
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for one invocation.
///
/// An explicit path must exist. Otherwise `linkchain.toml` in `cwd` is tried,
/// then the user config, then built-in defaults. Environment overrides are
/// applied last.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedConfig, ConfigError> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = cwd.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                Some(project)
            } else {
                user_config_path().filter(|p| p.is_file())
            }
        }
    };

    let loaded = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                warnings,
                source: Some(path),
            }
        }
        None => LoadedConfig::default(),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

/// User-level config: `$LINKCHAIN_CONFIG_HOME/config.toml`, else
/// `<platform config dir>/linkchain/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    let dir = match std::env::var_os(CONFIG_HOME_VAR) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::config_dir()?.join("linkchain"),
    };
    Some(dir.join("config.toml"))
}

/// Apply environment variable overrides (LINKCHAIN_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |name| std::env::var(name).ok(), &mut std::io::stderr())
}

/// Apply overrides from an arbitrary variable lookup (for testing)
pub fn with_env_overrides_from<F, W>(mut config: Config, lookup: F, writer: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(cc) = lookup("LINKCHAIN_CC").filter(|v| !v.trim().is_empty()) {
        config.toolchain.cc = cc.trim().to_string();
    }

    if let Some(ar) = lookup("LINKCHAIN_AR").filter(|v| !v.trim().is_empty()) {
        config.toolchain.ar = ar.trim().to_string();
    }

    if let Some(verbosity) = lookup("LINKCHAIN_VERBOSITY") {
        let current = config.output.verbosity;
        config.output.verbosity = EnvVarValidator::new("LINKCHAIN_VERBOSITY", Verbosity::NAMES)
            .parse_with_writer(&verbosity, Verbosity::parse, current, writer);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "toolchain",
        "cc",
        "ar",
        "output",
        "verbosity",
        "build",
        "compile",
        "source",
        "object",
        "archive",
        "objects",
        "link",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
