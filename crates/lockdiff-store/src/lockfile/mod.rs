//! uv.lock loading
//!
//! Parses lockfile text into [`LockfileSnapshot`](lockdiff_core::model::LockfileSnapshot)
//! and reads the current lockfile from a project directory.

pub mod format;
pub mod parser;

pub use format::{UvLockDocument, UvLockPackage};
pub use parser::{parse_lockfile_str, read_lockfile, read_lockfile_file, LOCKFILE_NAME};
