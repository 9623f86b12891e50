use crate::model::package::PackageRecord;
use std::collections::{BTreeSet, HashMap};

/// Immutable, fully-loaded view of one lockfile
///
/// Package names are unique within a snapshot. When the input repeats a name
/// the first occurrence wins and later ones are dropped (logged at `warn`).
/// The name index and name set are built once here and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct LockfileSnapshot {
    packages: Vec<PackageRecord>,
    requires_python: String,
    lock_version: Option<i64>,
    revision: Option<i64>,
    index: HashMap<String, usize>,
    names: BTreeSet<String>,
}

impl LockfileSnapshot {
    /// Create a snapshot from records in lockfile order
    pub fn new(packages: Vec<PackageRecord>, requires_python: impl Into<String>) -> Self {
        let mut kept = Vec::with_capacity(packages.len());
        let mut index = HashMap::with_capacity(packages.len());

        for record in packages {
            if index.contains_key(&record.name) {
                tracing::warn!(
                    component = module_path!(),
                    package_name = %record.name,
                    "duplicate package name in lockfile; keeping first entry"
                );
                continue;
            }
            index.insert(record.name.clone(), kept.len());
            kept.push(record);
        }

        let names = index.keys().cloned().collect();

        Self {
            packages: kept,
            requires_python: requires_python.into(),
            lock_version: None,
            revision: None,
            index,
            names,
        }
    }

    /// Attach the lockfile's own `version` / `revision` header values
    pub fn with_lock_metadata(mut self, lock_version: i64, revision: Option<i64>) -> Self {
        self.lock_version = Some(lock_version);
        self.revision = revision;
        self
    }

    /// Packages in lockfile order
    pub fn packages(&self) -> &[PackageRecord] {
        &self.packages
    }

    /// The `requires-python` constraint
    pub fn requires_python(&self) -> &str {
        &self.requires_python
    }

    /// Lockfile format version, when loaded from a document
    pub fn lock_version(&self) -> Option<i64> {
        self.lock_version
    }

    /// Lockfile format revision, when present in the document
    pub fn revision(&self) -> Option<i64> {
        self.revision
    }

    /// Look up a package by name
    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.index.get(name).map(|&i| &self.packages[i])
    }

    /// All package names
    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
