//! Build command: the whole pipeline from a manifest

use std::path::Path;

use anyhow::Result;

use linkchain::application::BuildPlan;
use linkchain::config::Config;
use linkchain::presentation::output::render_config_warning;
use linkchain::presentation::{create_event_sink, create_pipeline_use_case};
use linkchain::BuildError;

use super::CommandContext;

/// Run compile, archive and link from `[build]`.
///
/// With `--manifest`, only the manifest's `[build]` section is used; the
/// toolchain still comes from the resolved config.
pub fn cmd_build(manifest: Option<&Path>, ctx: &CommandContext) -> Result<i32> {
    let (build, base_dir, origin) = match manifest {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            for warning in &warnings {
                eprintln!("{}", render_config_warning(warning));
            }
            let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
            (config.build, base_dir, path.display().to_string())
        }
        None => {
            let origin = match &ctx.config_source {
                Some(source) => source.display().to_string(),
                None => "the configuration (no linkchain.toml found)".to_string(),
            };
            (ctx.config.build.clone(), ctx.config_dir(), origin)
        }
    };

    let build = build.ok_or_else(|| BuildError::InvalidManifest {
        message: format!("no [build] section in {}", origin),
    })?;
    let plan = BuildPlan::from_config(&build, base_dir)?;

    let sink = create_event_sink(ctx.json, ctx.verbosity);
    let use_case = create_pipeline_use_case(ctx.config.toolchain.clone(), ctx.json);
    let outcome = use_case.run(&plan, &*sink);

    match outcome.error {
        Some(err) => Err(err.into()),
        None => Ok(0),
    }
}
