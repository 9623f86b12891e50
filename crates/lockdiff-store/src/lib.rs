//! lockdiff Store - lockfile loading and report persistence
//!
//! Provides:
//! - uv.lock document format and parser into core snapshots
//! - Current lockfile reader (`<base_path>/uv.lock`)
//! - Base lockfile retrieval via `git show <sha>:uv.lock`
//! - Atomic JSON report writer

pub mod errors;
pub mod git;
pub mod lockfile;
pub mod output;

// Re-export key types
pub use errors::Result;
pub use git::read_base_lockfile;
pub use lockfile::{parse_lockfile_str, read_lockfile, read_lockfile_file, LOCKFILE_NAME};
pub use output::write_report;
