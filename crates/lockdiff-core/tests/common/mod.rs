use lockdiff_core::{LockfileSnapshot, PackageRecord};

/// Build a snapshot from `(name, version)` pairs in the given order
#[allow(dead_code)]
pub fn snapshot(packages: &[(&str, &str)]) -> LockfileSnapshot {
    snapshot_with_python(packages, ">=3.13")
}

/// Build a snapshot with an explicit `requires-python` constraint
#[allow(dead_code)]
pub fn snapshot_with_python(packages: &[(&str, &str)], requires_python: &str) -> LockfileSnapshot {
    LockfileSnapshot::new(
        packages
            .iter()
            .map(|(name, version)| PackageRecord::new(*name, Some(*version)))
            .collect(),
        requires_python,
    )
}

/// Names of the records, in order
#[allow(dead_code)]
pub fn names(records: &[PackageRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}
