//! Command line construction
//!
//! Builds the exact argument vectors each stage hands to the toolchain.
//! Argument order is part of the contract: the linker searches the archive
//! only after both direct objects.

use std::path::Path;

use crate::domain::ports::ToolInvocation;
use crate::domain::value_objects::{
    Toolchain, ARCHIVE_MODE, COMPILE_ONLY, LANGUAGE_STANDARD, WARNING_FLAGS,
};

/// `cc -Wall -Wextra -std=c11 -c <source> -o <object>`
pub fn compile_invocation(toolchain: &Toolchain, source: &Path, object: &Path) -> ToolInvocation {
    WARNING_FLAGS
        .iter()
        .fold(ToolInvocation::new(&toolchain.cc), |inv, flag| inv.arg(*flag))
        .arg(LANGUAGE_STANDARD)
        .arg(COMPILE_ONLY)
        .path(source)
        .arg("-o")
        .path(object)
}

/// `ar rcs <archive> <object1> <object2>`
pub fn archive_invocation(
    toolchain: &Toolchain,
    objects: &[&Path; 2],
    archive: &Path,
) -> ToolInvocation {
    ToolInvocation::new(&toolchain.ar)
        .arg(ARCHIVE_MODE)
        .path(archive)
        .path(objects[0])
        .path(objects[1])
}

/// `cc -Wall -Wextra <object1> <object2> <archive> -o <executable>`
pub fn link_invocation(
    toolchain: &Toolchain,
    objects: &[&Path; 2],
    archive: &Path,
    executable: &Path,
) -> ToolInvocation {
    WARNING_FLAGS
        .iter()
        .fold(ToolInvocation::new(&toolchain.cc), |inv, flag| inv.arg(*flag))
        .path(objects[0])
        .path(objects[1])
        .path(archive)
        .arg("-o")
        .path(executable)
}
