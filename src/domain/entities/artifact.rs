//! Artifact Entity
//!
//! A build artifact is a file handed from one stage to the next. The pipeline
//! never holds artifact contents in memory; the path is the identity.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Kind of file flowing through the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Compilable source text (input only)
    SourceUnit,
    /// Output of compiling exactly one source unit
    ObjectFile,
    /// Static library bundling object files
    Archive,
    /// Final linked binary (output only)
    Executable,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::SourceUnit => write!(f, "source file"),
            ArtifactKind::ObjectFile => write!(f, "object file"),
            ArtifactKind::Archive => write!(f, "archive"),
            ArtifactKind::Executable => write!(f, "executable"),
        }
    }
}

/// A named file of a known kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artifact {
    kind: ArtifactKind,
    path: PathBuf,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    pub fn source(path: impl Into<PathBuf>) -> Self {
        Self::new(ArtifactKind::SourceUnit, path)
    }

    pub fn object(path: impl Into<PathBuf>) -> Self {
        Self::new(ArtifactKind::ObjectFile, path)
    }

    pub fn archive(path: impl Into<PathBuf>) -> Self {
        Self::new(ArtifactKind::Archive, path)
    }

    pub fn executable(path: impl Into<PathBuf>) -> Self {
        Self::new(ArtifactKind::Executable, path)
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
