//! Lockfile diff computation engine.
//!
//! The core entry point is [`compute_diff`], which accepts two optional
//! snapshots and produces [`LockfileChanges`].

use crate::diff::model::{LockfileChanges, RequiresPythonChange, UpdatedPackage};
use crate::model::{LockfileSnapshot, PackageRecord};
use crate::{log_op_end, log_op_start};
use std::collections::BTreeSet;
use std::time::Instant;

/// Name-level comparison of two optional snapshots
///
/// The three name sets are computed once when the diff is created. Either
/// snapshot may be absent: a missing old snapshot makes every new package
/// "added", a missing new snapshot makes every old package "removed".
#[derive(Debug, Clone)]
pub struct LockfileDiff<'a> {
    old: Option<&'a LockfileSnapshot>,
    new: Option<&'a LockfileSnapshot>,
    added_package_names: BTreeSet<String>,
    removed_package_names: BTreeSet<String>,
    both_lockfile_package_names: BTreeSet<String>,
}

impl<'a> LockfileDiff<'a> {
    pub fn new(old: Option<&'a LockfileSnapshot>, new: Option<&'a LockfileSnapshot>) -> Self {
        let empty = BTreeSet::new();
        let old_names = old.map(LockfileSnapshot::names).unwrap_or(&empty);
        let new_names = new.map(LockfileSnapshot::names).unwrap_or(&empty);

        let added_package_names = new_names.difference(old_names).cloned().collect();
        let removed_package_names = old_names.difference(new_names).cloned().collect();
        let both_lockfile_package_names = old_names.intersection(new_names).cloned().collect();

        Self {
            old,
            new,
            added_package_names,
            removed_package_names,
            both_lockfile_package_names,
        }
    }

    /// Names only in the new snapshot
    pub fn added_package_names(&self) -> &BTreeSet<String> {
        &self.added_package_names
    }

    /// Names only in the old snapshot
    pub fn removed_package_names(&self) -> &BTreeSet<String> {
        &self.removed_package_names
    }

    /// Names in both snapshots
    pub fn both_lockfile_package_names(&self) -> &BTreeSet<String> {
        &self.both_lockfile_package_names
    }

    /// Added records, in new-snapshot order
    pub fn added(&self) -> Vec<PackageRecord> {
        select(self.new, &self.added_package_names)
    }

    /// Removed records, in old-snapshot order
    pub fn removed(&self) -> Vec<PackageRecord> {
        select(self.old, &self.removed_package_names)
    }

    /// Version changes for packages in both snapshots (unsorted)
    ///
    /// Packages without a version on either side (local/editable) are skipped.
    pub fn updated(&self) -> Vec<UpdatedPackage> {
        let (Some(old), Some(new)) = (self.old, self.new) else {
            return Vec::new();
        };

        new.packages()
            .iter()
            .filter(|record| self.both_lockfile_package_names.contains(&record.name))
            .filter_map(|new_record| {
                let old_record = old.get(&new_record.name)?;
                if old_record == new_record {
                    return None;
                }
                let old_version = old_record.version.clone()?;
                let new_version = new_record.version.clone()?;
                Some(UpdatedPackage::new(
                    new_record.name.clone(),
                    old_version,
                    new_version,
                ))
            })
            .collect()
    }

    /// Old/new `requires-python` values
    pub fn requires_python(&self) -> RequiresPythonChange {
        RequiresPythonChange::new(
            self.old.map(|s| s.requires_python().to_string()),
            self.new.map(|s| s.requires_python().to_string()),
        )
    }

    /// Assemble the full change set
    pub fn changes(&self) -> LockfileChanges {
        LockfileChanges::new(
            self.added(),
            self.removed(),
            self.updated(),
            self.requires_python(),
        )
    }
}

fn select(snapshot: Option<&LockfileSnapshot>, names: &BTreeSet<String>) -> Vec<PackageRecord> {
    snapshot
        .map(|s| {
            s.packages()
                .iter()
                .filter(|record| names.contains(&record.name))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

/// Compute the changes between two optional lockfile snapshots
///
/// Pure function of its inputs apart from `tracing` events.
pub fn compute_diff(
    old: Option<&LockfileSnapshot>,
    new: Option<&LockfileSnapshot>,
) -> LockfileChanges {
    let start = Instant::now();
    log_op_start!(
        "compute_diff",
        has_old = old.is_some(),
        has_new = new.is_some()
    );

    let changes = LockfileDiff::new(old, new).changes();

    log_op_end!(
        "compute_diff",
        duration_ms = start.elapsed().as_millis() as u64,
        added_len = changes.added().len(),
        removed_len = changes.removed().len(),
        updated_len = changes.updated().len()
    );
    changes
}
