//! Single-stage commands: compile, archive, link

use std::path::PathBuf;

use anyhow::Result;

use linkchain::application::{ArchiveRequest, CompileRequest, LinkRequest};
use linkchain::domain::value_objects::StageKind;
use linkchain::presentation::{create_event_sink, create_stage_use_case};

use super::CommandContext;

/// Run one stage with positional `paths`; arity is checked before anything runs
pub fn cmd_stage(stage: StageKind, paths: &[PathBuf], ctx: &CommandContext) -> Result<i32> {
    let use_case = create_stage_use_case(ctx.config.toolchain.clone(), ctx.json);
    let sink = create_event_sink(ctx.json, ctx.verbosity);

    match stage {
        StageKind::Compile => {
            let request = CompileRequest::from_args(paths)?;
            use_case.compile(&request, &*sink)?;
        }
        StageKind::Archive => {
            let request = ArchiveRequest::from_args(paths)?;
            use_case.archive(&request, &*sink)?;
        }
        StageKind::Link => {
            let request = LinkRequest::from_args(paths)?;
            use_case.link(&request, &*sink)?;
        }
    }

    Ok(0)
}
