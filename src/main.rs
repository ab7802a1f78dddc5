//! linkchain CLI - compile, archive and link with the native toolchain
//!
//! Usage: linkchain <COMMAND>
//!
//! Commands:
//!   compile  Compile one C source file into an object file
//!   archive  Bundle two object files into a static archive
//!   link     Link two objects and an archive into an executable
//!   build    Run all three stages from a manifest
//!   doctor   Check the configured toolchain

use anyhow::Result;
use clap::Parser;

use linkchain::domain::value_objects::StageKind;
use linkchain::presentation::{Cli, Commands};

mod commands;

use commands::CommandContext;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            let code = commands::exit_code_for(&err);
            commands::print_error(&err, json, code);
            code
        }
    };

    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let ctx = CommandContext::from_cli(&cli)?;

    match &cli.command {
        Commands::Compile { paths } => commands::stage::cmd_stage(StageKind::Compile, paths, &ctx),
        Commands::Archive { paths } => commands::stage::cmd_stage(StageKind::Archive, paths, &ctx),
        Commands::Link { paths } => commands::stage::cmd_stage(StageKind::Link, paths, &ctx),
        Commands::Build { manifest } => commands::build::cmd_build(manifest.as_deref(), &ctx),
        Commands::Doctor => commands::doctor::cmd_doctor(&ctx),
    }
}
