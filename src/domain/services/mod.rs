//! Domain Services
//!
//! Stateless logic shared by the application layer.

pub mod invocation;

pub use invocation::{archive_invocation, compile_invocation, link_invocation};
