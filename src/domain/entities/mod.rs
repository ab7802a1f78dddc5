//! Domain Entities
//!
//! Every entity is a file on disk, identified by its path.

mod artifact;

pub use artifact::{Artifact, ArtifactKind};
