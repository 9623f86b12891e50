//! Lockfile diff output types.
//!
//! All types implement `Debug, Clone, Serialize, PartialEq`. The updated list
//! is kept sorted by construction so serialized output is deterministic.

use crate::diff::classify::{sort_by_change_level, VersionChangeLevel};
use crate::model::PackageRecord;
use crate::version::PackageVersion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A package present in both lockfiles with a different version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedPackage {
    pub name: String,
    pub old_version: PackageVersion,
    pub new_version: PackageVersion,
}

impl UpdatedPackage {
    pub fn new(
        name: impl Into<String>,
        old_version: impl Into<PackageVersion>,
        new_version: impl Into<PackageVersion>,
    ) -> Self {
        Self {
            name: name.into(),
            old_version: old_version.into(),
            new_version: new_version.into(),
        }
    }

    /// Severity of this update
    pub fn change_level(&self) -> VersionChangeLevel {
        VersionChangeLevel::classify(&self.old_version, &self.new_version)
    }
}

impl fmt::Display for UpdatedPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.name, self.old_version, self.new_version)
    }
}

/// Old/new values of the `requires-python` constraint
///
/// A side is `None` when the corresponding lockfile is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiresPythonChange {
    pub old: Option<String>,
    pub new: Option<String>,
}

impl RequiresPythonChange {
    pub fn new(old: Option<String>, new: Option<String>) -> Self {
        Self { old, new }
    }

    /// True when the two sides differ
    pub fn is_changed(&self) -> bool {
        self.old != self.new
    }
}

/// The added/removed/updated packages between two lockfiles
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LockfileChanges {
    added: Vec<PackageRecord>,
    removed: Vec<PackageRecord>,
    updated: Vec<UpdatedPackage>,
    requires_python: RequiresPythonChange,
}

impl LockfileChanges {
    /// Assemble changes; `updated` is re-sorted by `(change level, name)`
    pub fn new(
        added: Vec<PackageRecord>,
        removed: Vec<PackageRecord>,
        updated: Vec<UpdatedPackage>,
        requires_python: RequiresPythonChange,
    ) -> Self {
        Self {
            added,
            removed,
            updated: sort_by_change_level(updated),
            requires_python,
        }
    }

    /// Packages only in the new lockfile, in new-lockfile order
    pub fn added(&self) -> &[PackageRecord] {
        &self.added
    }

    /// Packages only in the old lockfile, in old-lockfile order
    pub fn removed(&self) -> &[PackageRecord] {
        &self.removed
    }

    /// Version changes, most severe first
    pub fn updated(&self) -> &[UpdatedPackage] {
        &self.updated
    }

    pub fn requires_python(&self) -> &RequiresPythonChange {
        &self.requires_python
    }

    /// Total number of changed packages
    pub fn items(&self) -> usize {
        self.added.len() + self.removed.len() + self.updated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items() == 0 && !self.requires_python.is_changed()
    }
}

impl fmt::Display for LockfileChanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = Vec::new();
        if !self.added.is_empty() {
            lines.push("Added:".to_string());
            lines.extend(self.added.iter().map(|p| p.to_string()));
        }
        if !self.updated.is_empty() {
            lines.push("Updated:".to_string());
            lines.extend(self.updated.iter().map(|p| p.to_string()));
        }
        if !self.removed.is_empty() {
            lines.push("Removed:".to_string());
            lines.extend(self.removed.iter().map(|p| p.to_string()));
        }
        f.write_str(&lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    #[test]
    fn test_updated_package_serialization() {
        let update = UpdatedPackage::new("steve", Version::new(1, 0, 0), Version::new(2, 0, 0));
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({
                "name": "steve",
                "old_version": "1.0.0",
                "new_version": "2.0.0",
            })
        );
        assert_eq!(update.to_string(), "steve: 1.0.0 -> 2.0.0");
    }

    #[test]
    fn test_items_counts_all_lists() {
        let changes = LockfileChanges::new(
            vec![PackageRecord::new("a", Some("1.0.0"))],
            vec![PackageRecord::new("b", Some("1.0.0")), PackageRecord::new("c", None)],
            vec![UpdatedPackage::new(
                "d",
                Version::new(1, 0, 0),
                Version::new(1, 0, 1),
            )],
            RequiresPythonChange::default(),
        );
        assert_eq!(changes.items(), 4);
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_new_sorts_updated() {
        let changes = LockfileChanges::new(
            vec![],
            vec![],
            vec![
                UpdatedPackage::new("b", Version::new(1, 0, 0), Version::new(1, 0, 1)),
                UpdatedPackage::new("a", Version::new(1, 0, 0), Version::new(2, 0, 0)),
            ],
            RequiresPythonChange::default(),
        );
        let names: Vec<&str> = changes.updated().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_requires_python_change_detection() {
        assert!(!RequiresPythonChange::new(None, None).is_changed());
        assert!(
            !RequiresPythonChange::new(Some(">=3.13".into()), Some(">=3.13".into())).is_changed()
        );
        assert!(RequiresPythonChange::new(Some(">=3.12".into()), Some(">=3.13".into())).is_changed());
        assert!(RequiresPythonChange::new(None, Some(">=3.13".into())).is_changed());
    }

    #[test]
    fn test_display_lists_sections() {
        let changes = LockfileChanges::new(
            vec![PackageRecord::new("added_1", Some("1.0.0"))],
            vec![PackageRecord::new("removed_1", Some("4.2.0"))],
            vec![],
            RequiresPythonChange::default(),
        );
        assert_eq!(
            changes.to_string(),
            "Added:\nadded_1: 1.0.0\nRemoved:\nremoved_1: 4.2.0"
        );
    }
}
