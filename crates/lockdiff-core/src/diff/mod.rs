//! Lockfile diff engine.
//!
//! Compares two optional lockfile snapshots and produces a structured,
//! deterministic set of changes suitable for rendering into a pull-request
//! comment.
//!
//! ## Entry point
//!
//! ```
//! use lockdiff_core::diff::compute_diff;
//! use lockdiff_core::model::{LockfileSnapshot, PackageRecord};
//!
//! let new = LockfileSnapshot::new(vec![PackageRecord::new("pkg", Some("1.0.0"))], ">=3.13");
//! let changes = compute_diff(None, Some(&new));
//! assert_eq!(changes.items(), 1);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical changes; the updated
//!   list is always ordered by `(change level, name)`.
//! - **Absent snapshots**: a missing base lockfile is an "initial lockfile"
//!   diff where every package is added.
//! - **Local packages**: entries without a version are never reported as
//!   updated.

pub mod classify;
pub mod engine;
pub mod model;

pub use classify::{gitmoji, sort_by_change_level, VersionChangeLevel};
pub use engine::{compute_diff, LockfileDiff};
pub use model::{LockfileChanges, RequiresPythonChange, UpdatedPackage};
