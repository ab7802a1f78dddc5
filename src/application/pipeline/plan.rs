//! Build plan - the fixed set of stage requests for one pipeline run

use std::path::{Path, PathBuf};

use crate::application::stage::{ArchiveRequest, CompileRequest, LinkRequest};
use crate::config::BuildConfig;
use crate::error::{BuildError, BuildResult};

/// Every request the pipeline will run, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub compile: Vec<CompileRequest>,
    pub archive: ArchiveRequest,
    pub link: LinkRequest,
}

impl BuildPlan {
    pub fn new(compile: Vec<CompileRequest>, archive: ArchiveRequest, link: LinkRequest) -> Self {
        Self {
            compile,
            archive,
            link,
        }
    }

    /// Build a plan from a `[build]` config section.
    ///
    /// Relative paths are resolved against `base_dir` (the manifest's directory).
    pub fn from_config(config: &BuildConfig, base_dir: &Path) -> BuildResult<Self> {
        if config.compile.is_empty() {
            return Err(invalid("[[build.compile]] must list at least one source"));
        }

        let compile = config
            .compile
            .iter()
            .map(|unit| {
                CompileRequest::new(
                    resolve(base_dir, &unit.source),
                    resolve(base_dir, &unit.object),
                )
            })
            .collect();

        let archive = config
            .archive
            .as_ref()
            .ok_or_else(|| invalid("missing [build.archive] section"))?;
        let [first, second] = two_objects("build.archive", &archive.objects)?;
        let archive = ArchiveRequest::new(
            resolve(base_dir, first),
            resolve(base_dir, second),
            resolve(base_dir, &archive.output),
        );

        let link = config
            .link
            .as_ref()
            .ok_or_else(|| invalid("missing [build.link] section"))?;
        let [first, second] = two_objects("build.link", &link.objects)?;
        let link = LinkRequest::new(
            resolve(base_dir, first),
            resolve(base_dir, second),
            resolve(base_dir, &link.archive),
            resolve(base_dir, &link.output),
        );

        Ok(Self::new(compile, archive, link))
    }
}

fn two_objects<'a>(section: &str, objects: &'a [PathBuf]) -> BuildResult<[&'a PathBuf; 2]> {
    match objects {
        [first, second] => Ok([first, second]),
        _ => Err(invalid(&format!(
            "[{section}] needs exactly 2 objects, found {}",
            objects.len()
        ))),
    }
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || base_dir.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

fn invalid(message: &str) -> BuildError {
    BuildError::InvalidManifest {
        message: message.to_string(),
    }
}
