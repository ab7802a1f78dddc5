//! Detection of the host C toolchain.
//!
//! Tests that need a real compiler call `require_toolchain!()` and return
//! early (with a note on stderr) when `cc` or `ar` cannot be spawned.

use std::process::{Command, Stdio};

fn spawnable(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Both `cc` and `ar` can be run
pub fn toolchain_available() -> bool {
    spawnable("cc") && spawnable("ar")
}

/// Member names of an archive, as listed by `ar t`
pub fn archive_members(archive: &std::path::Path) -> Vec<String> {
    let output = Command::new("ar")
        .arg("t")
        .arg(archive)
        .output()
        .expect("Failed to run ar t");
    assert!(output.status.success(), "ar t failed on {}", archive.display());

    let mut members: Vec<String> = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty() && !line.starts_with("__.SYMDEF"))
        .collect();
    members.sort();
    members
}

#[macro_export]
macro_rules! require_toolchain {
    () => {
        if !$crate::common::toolchain_available() {
            eprintln!("skipping: cc/ar not available");
            return;
        }
    };
}
