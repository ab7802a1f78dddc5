//! Stage Value Object
//!
//! The three build stages and their fixed command-line shape.

use std::fmt;

use serde::Serialize;

/// One of the three pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    /// source -> object
    Compile,
    /// two objects -> static archive
    Archive,
    /// two objects + archive -> executable
    Link,
}

impl StageKind {
    /// All stages in execution order
    pub const ALL: [StageKind; 3] = [StageKind::Compile, StageKind::Archive, StageKind::Link];

    /// Name used in progress lines and subcommands
    pub fn name(self) -> &'static str {
        match self {
            StageKind::Compile => "compile",
            StageKind::Archive => "archive",
            StageKind::Link => "link",
        }
    }

    /// Number of positional arguments the stage accepts
    pub fn arity(self) -> usize {
        match self {
            StageKind::Compile => 2,
            StageKind::Archive => 3,
            StageKind::Link => 4,
        }
    }

    /// Positional argument synopsis, in order
    pub fn usage(self) -> &'static str {
        match self {
            StageKind::Compile => "<source-path> <object-output-path>",
            StageKind::Archive => "<object1-path> <object2-path> <archive-output-path>",
            StageKind::Link => {
                "<object1-path> <object2-path> <archive-path> <executable-output-path>"
            }
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_matches_usage_synopsis() {
        for stage in StageKind::ALL {
            assert_eq!(
                stage.usage().split_whitespace().count(),
                stage.arity(),
                "usage for {stage} disagrees with arity"
            );
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&StageKind::Link).unwrap();
        assert_eq!(json, r#""link""#);
    }
}
