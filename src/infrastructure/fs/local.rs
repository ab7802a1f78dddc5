//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

/// Where the directory entry for `path` lives: canonical parent plus file name.
///
/// The entry itself is not resolved, since removing a symlink removes the
/// link and not its target.
fn entry_location(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Some(parent.canonicalize().ok()?.join(name))
}

impl FileSystem for LocalFs {
    fn same_location(&self, input: &Path, output: &Path) -> bool {
        if input == output {
            return true;
        }

        let Some(target) = entry_location(output) else {
            return false;
        };

        // Removing the target of a symlinked input destroys the input too.
        entry_location(input).as_ref() == Some(&target)
            || input.canonicalize().ok().as_ref() == Some(&target)
    }

    fn is_readable(&self, path: &Path) -> bool {
        path.is_file() && File::open(path).is_ok()
    }

    fn remove_if_exists(&self, path: &Path) -> FsResult<()> {
        if path.is_dir() {
            return Err(FsError::IsDirectory(path.to_path_buf()));
        }

        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                Err(FsError::PermissionDenied(path.to_path_buf()))
            }
            Err(e) => Err(FsError::Io(e)),
        }
    }
}
