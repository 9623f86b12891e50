//! Diff engine scenarios: absent snapshots, mixed changes, ordering and
//! local packages.

mod common;

use common::{names, snapshot, snapshot_with_python};
use lockdiff_core::diff::{compute_diff, RequiresPythonChange, VersionChangeLevel};
use lockdiff_core::{LockfileSnapshot, PackageRecord, PackageVersion};

#[test]
fn test_both_absent_is_empty() {
    let changes = compute_diff(None, None);

    assert!(changes.added().is_empty());
    assert!(changes.removed().is_empty());
    assert!(changes.updated().is_empty());
    assert_eq!(changes.items(), 0);
    assert_eq!(changes.requires_python(), &RequiresPythonChange::new(None, None));
    assert!(changes.is_empty());
}

#[test]
fn test_old_absent_everything_added() {
    // Given: No base lockfile
    let new = snapshot(&[("pkg1", "1.0.0"), ("pkg2", "2.0.0")]);

    // When: We diff against the new lockfile
    let changes = compute_diff(None, Some(&new));

    // Then: Every package is added, in new-lockfile order
    assert_eq!(names(changes.added()), vec!["pkg1", "pkg2"]);
    assert!(changes.removed().is_empty());
    assert!(changes.updated().is_empty());
    assert_eq!(changes.items(), 2);
    assert_eq!(
        changes.requires_python(),
        &RequiresPythonChange::new(None, Some(">=3.13".to_string()))
    );
}

#[test]
fn test_new_absent_everything_removed() {
    let old = snapshot(&[("pkg1", "1.0.0"), ("pkg2", "2.0.0")]);

    let changes = compute_diff(Some(&old), None);

    assert!(changes.added().is_empty());
    assert_eq!(names(changes.removed()), vec!["pkg1", "pkg2"]);
    assert!(changes.updated().is_empty());
    assert_eq!(changes.items(), 2);
}

#[test]
fn test_mixed_changes() {
    // Given: Lockfiles sharing some packages
    let old = snapshot(&[("pkg1", "1.0.0"), ("pkg2", "2.0.0"), ("pkg3", "3.0.0")]);
    let new = snapshot(&[("pkg1", "1.5.0"), ("pkg3", "3.0.0"), ("pkg4", "4.0.0")]);

    // When: We diff them
    let changes = compute_diff(Some(&old), Some(&new));

    // Then: Each category holds exactly the expected package
    assert_eq!(names(changes.added()), vec!["pkg4"]);
    assert_eq!(names(changes.removed()), vec!["pkg2"]);
    assert_eq!(changes.updated().len(), 1);

    let update = &changes.updated()[0];
    assert_eq!(update.name, "pkg1");
    assert_eq!(update.old_version.to_string(), "1.0.0");
    assert_eq!(update.new_version.to_string(), "1.5.0");
    assert_eq!(update.change_level(), VersionChangeLevel::Minor);

    assert_eq!(changes.items(), 3);
    assert!(!changes.requires_python().is_changed());
}

#[test]
fn test_added_and_removed_keep_lockfile_order() {
    let old = snapshot(&[("zeta", "1.0.0"), ("common", "1.0.0"), ("alpha", "1.0.0")]);
    let new = snapshot(&[("yak", "1.0.0"), ("common", "1.0.0"), ("beta", "1.0.0")]);

    let changes = compute_diff(Some(&old), Some(&new));

    assert_eq!(names(changes.added()), vec!["yak", "beta"]);
    assert_eq!(names(changes.removed()), vec!["zeta", "alpha"]);
}

#[test]
fn test_updated_sorted_by_level_then_name() {
    let old = snapshot(&[
        ("unknown-pkg", "1.0.0.post0"),
        ("patch-pkg", "1.0.0"),
        ("beta", "1.0.0"),
        ("minor-pkg", "1.0.0"),
        ("alpha", "1.0.0"),
    ]);
    let new = snapshot(&[
        ("unknown-pkg", "1.0.0.post1"),
        ("patch-pkg", "1.0.1"),
        ("beta", "2.0.0"),
        ("minor-pkg", "1.1.0"),
        ("alpha", "3.0.0"),
    ]);

    let changes = compute_diff(Some(&old), Some(&new));
    let order: Vec<(&str, VersionChangeLevel)> = changes
        .updated()
        .iter()
        .map(|u| (u.name.as_str(), u.change_level()))
        .collect();

    assert_eq!(
        order,
        vec![
            ("alpha", VersionChangeLevel::Major),
            ("beta", VersionChangeLevel::Major),
            ("minor-pkg", VersionChangeLevel::Minor),
            ("patch-pkg", VersionChangeLevel::Patch),
            ("unknown-pkg", VersionChangeLevel::Unknown),
        ]
    );
}

#[test]
fn test_local_packages_never_updated() {
    // Given: An editable project package without a version on both sides
    let old = LockfileSnapshot::new(
        vec![
            PackageRecord::new("my-app", None),
            PackageRecord::new("rich", Some("13.7.0")),
        ],
        ">=3.12",
    );
    let new = LockfileSnapshot::new(
        vec![
            PackageRecord::new("my-app", None),
            PackageRecord::new("rich", Some("13.7.1")),
            PackageRecord::new("plugin", None),
        ],
        ">=3.12",
    );

    // When: We diff
    let changes = compute_diff(Some(&old), Some(&new));

    // Then: Only the versioned package is compared
    assert_eq!(changes.updated().len(), 1);
    assert_eq!(changes.updated()[0].name, "rich");

    // And: A new local package is still reported as added
    assert_eq!(names(changes.added()), vec!["plugin"]);
    assert!(changes.added()[0].is_unversioned());
}

#[test]
fn test_opaque_side_still_compared() {
    let old = snapshot(&[("python-dateutil", "2.8.2")]);
    let new = snapshot(&[("python-dateutil", "2.9.0.post0")]);

    let changes = compute_diff(Some(&old), Some(&new));

    assert_eq!(changes.updated().len(), 1);
    let update = &changes.updated()[0];
    assert!(matches!(update.new_version, PackageVersion::Opaque(_)));
    assert_eq!(update.change_level(), VersionChangeLevel::Unknown);
}

#[test]
fn test_requires_python_change_detected() {
    let old = snapshot_with_python(&[("pkg", "1.0.0")], ">=3.12");
    let new = snapshot_with_python(&[("pkg", "1.0.0")], ">=3.13");

    let changes = compute_diff(Some(&old), Some(&new));

    assert!(changes.requires_python().is_changed());
    assert_eq!(changes.items(), 0);
    assert!(!changes.is_empty());
}

#[test]
fn test_identical_lockfiles_have_no_changes() {
    let lock = snapshot(&[("a", "1.0.0"), ("b", "2.0.0.post3")]);
    let changes = compute_diff(Some(&lock), Some(&lock.clone()));
    assert!(changes.is_empty());
}

#[test]
fn test_diff_is_deterministic() {
    let old = snapshot(&[("a", "1.0.0"), ("b", "1.0.0"), ("c", "1.0.0")]);
    let new = snapshot(&[("c", "2.0.0"), ("b", "1.0.1"), ("d", "1.0.0")]);

    let first = compute_diff(Some(&old), Some(&new));
    let second = compute_diff(Some(&old), Some(&new));
    assert_eq!(first, second);
}
