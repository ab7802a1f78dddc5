//! FileSystem port - the file checks the pipeline performs itself
//!
//! Stages never read or write artifact contents; the toolchain does that.
//! The pipeline only verifies inputs and clears stale outputs.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Path is a directory where a file was expected
    IsDirectory(PathBuf),
    /// I/O error
    Io(std::io::Error),
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::IsDirectory(path) => write!(f, "Is a directory: {}", path.display()),
            FsError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for FsError {}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `Mock*` file systems in tests
pub trait FileSystem {
    /// Whether removing `output` would destroy `input`, however either is spelled
    fn same_location(&self, input: &Path, output: &Path) -> bool;

    /// Check if a path is a regular file that can be opened for reading
    fn is_readable(&self, path: &Path) -> bool;

    /// Remove a file; removing a missing file is not an error
    fn remove_if_exists(&self, path: &Path) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn same_location(&self, input: &Path, output: &Path) -> bool {
        (**self).same_location(input, output)
    }

    fn is_readable(&self, path: &Path) -> bool {
        (**self).is_readable(path)
    }

    fn remove_if_exists(&self, path: &Path) -> FsResult<()> {
        (**self).remove_if_exists(path)
    }
}
