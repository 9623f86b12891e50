//! uv.lock document format
//!
//! Only the keys the reporter needs are modelled. Everything else in the
//! document (sources, wheels, dependency edges) is ignored.

use serde::Deserialize;

/// Top-level uv.lock document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UvLockDocument {
    /// Lockfile format version
    pub version: Option<i64>,

    /// Lockfile format revision
    pub revision: Option<i64>,

    /// Python version constraint for the project
    #[serde(default)]
    pub requires_python: String,

    /// Resolved packages in lockfile order
    pub package: Vec<UvLockPackage>,
}

/// One `[[package]]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UvLockPackage {
    pub name: String,

    /// Absent for local and editable packages
    pub version: Option<String>,
}
