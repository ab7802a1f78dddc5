//! Custom assertion macros for CLI and scenario tests.

use std::path::Path;

/// List the files directly in a directory (for failure messages)
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    files.sort();
    files
}

/// Assert that a stage produced an artifact.
#[macro_export]
macro_rules! assert_artifact {
    ($env:expr, $path:expr) => {
        assert!(
            $env.exists($path),
            "Expected artifact '{}', but it doesn't exist.\nFiles found: {:?}",
            $path,
            $crate::common::list_files($env.root.path())
        );
    };
}

/// Assert that no artifact exists at a path.
#[macro_export]
macro_rules! assert_no_artifact {
    ($env:expr, $path:expr) => {
        assert!(
            !$env.exists($path),
            "Expected no artifact at '{}', but one exists.",
            $path
        );
    };
}

/// Assert a command exited with a specific code, dumping output on failure.
#[macro_export]
macro_rules! assert_exit_code {
    ($result:expr, $code:expr) => {
        assert_eq!(
            $result.exit_code,
            $code,
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            $result.stdout,
            $result.stderr
        );
    };
}
