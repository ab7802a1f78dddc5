//! Doctor command: can the configured toolchain be spawned?

use anyhow::Result;

use linkchain::application::check_toolchain;
use linkchain::infrastructure::SystemProcessRunner;
use linkchain::presentation::output::{
    render_doctor_json, render_doctor_text, stdout_supports_unicode,
};

use super::CommandContext;

pub fn cmd_doctor(ctx: &CommandContext) -> Result<i32> {
    let report = check_toolchain(&SystemProcessRunner::new(), &ctx.config.toolchain);

    if ctx.json {
        println!("{}", render_doctor_json(&report));
    } else {
        print!("{}", render_doctor_text(&report, stdout_supports_unicode()));
    }

    Ok(if report.is_healthy() { 0 } else { 1 })
}
