//! lockdiff Core - version-aware diff engine for uv lockfiles
//!
//! This crate provides the decision logic behind the `lockdiff` reporter:
//! - Tolerant version parsing (strict semver, then coercion, then opaque text)
//! - Immutable lockfile snapshots with name-indexed lookup
//! - Added/removed/updated package diffing between two optional snapshots
//! - Major/minor/patch classification and ordering of updates
//! - Markdown and JSON report rendering
//!
//! Reading lockfiles from disk or git lives in `lockdiff-store`.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;
pub mod version;

// Re-exported for the logging macros
pub use lockdiff_core_types;

// Re-export commonly used types
pub use diff::{compute_diff, LockfileChanges, UpdatedPackage, VersionChangeLevel};
pub use errors::{ExError, ExErrorKind, LockDiffError, Result};
pub use model::{LockfileSnapshot, PackageRecord};
pub use render::{render_markdown, LockfileReport, OutputFormat};
pub use version::PackageVersion;
