//! Semantic-version severity of package updates.

use crate::diff::model::UpdatedPackage;
use crate::version::PackageVersion;
use serde::{Deserialize, Serialize};

/// Severity of a version transition
///
/// Ordered `Major < Minor < Patch < Unknown` so that ascending sorts put the
/// most severe change first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VersionChangeLevel {
    Major,
    Minor,
    Patch,
    /// Either side is not structured, or only prerelease/build differ
    Unknown,
}

impl VersionChangeLevel {
    pub const ALL: [VersionChangeLevel; 4] = [
        VersionChangeLevel::Major,
        VersionChangeLevel::Minor,
        VersionChangeLevel::Patch,
        VersionChangeLevel::Unknown,
    ];

    /// Classify the transition from `old` to `new`
    pub fn classify(old: &PackageVersion, new: &PackageVersion) -> Self {
        match (old, new) {
            (PackageVersion::Structured(old), PackageVersion::Structured(new)) => {
                if old.major != new.major {
                    VersionChangeLevel::Major
                } else if old.minor != new.minor {
                    VersionChangeLevel::Minor
                } else if old.patch != new.patch {
                    VersionChangeLevel::Patch
                } else {
                    VersionChangeLevel::Unknown
                }
            }
            (PackageVersion::Opaque(_), _) | (_, PackageVersion::Opaque(_)) => {
                VersionChangeLevel::Unknown
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VersionChangeLevel::Major => "major",
            VersionChangeLevel::Minor => "minor",
            VersionChangeLevel::Patch => "patch",
            VersionChangeLevel::Unknown => "unknown",
        }
    }
}

/// Gitmoji shortcode shown next to a change in the simple report style
pub fn gitmoji(level: VersionChangeLevel) -> &'static str {
    match level {
        VersionChangeLevel::Major => ":collision:",
        VersionChangeLevel::Minor => ":sparkles:",
        VersionChangeLevel::Patch => ":hammer_and_wrench:",
        VersionChangeLevel::Unknown => ":question:",
    }
}

/// Sort updates by `(change level, name)`, most severe first
pub fn sort_by_change_level(mut packages: Vec<UpdatedPackage>) -> Vec<UpdatedPackage> {
    packages.sort_by(|a, b| {
        a.change_level()
            .cmp(&b.change_level())
            .then_with(|| a.name.cmp(&b.name))
    });
    packages
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    fn structured(major: u64, minor: u64, patch: u64) -> PackageVersion {
        PackageVersion::Structured(Version::new(major, minor, patch))
    }

    fn update(name: &str, old: PackageVersion, new: PackageVersion) -> UpdatedPackage {
        UpdatedPackage::new(name, old, new)
    }

    #[test]
    fn test_classify_major_minor_patch() {
        assert_eq!(
            VersionChangeLevel::classify(&structured(1, 0, 0), &structured(2, 0, 0)),
            VersionChangeLevel::Major
        );
        assert_eq!(
            VersionChangeLevel::classify(&structured(1, 0, 0), &structured(1, 1, 0)),
            VersionChangeLevel::Minor
        );
        assert_eq!(
            VersionChangeLevel::classify(&structured(1, 0, 0), &structured(1, 0, 1)),
            VersionChangeLevel::Patch
        );
    }

    #[test]
    fn test_classify_downgrades() {
        assert_eq!(
            VersionChangeLevel::classify(&structured(4, 20, 1), &structured(3, 14, 0)),
            VersionChangeLevel::Major
        );
        assert_eq!(
            VersionChangeLevel::classify(&structured(4, 20, 1), &structured(4, 10, 0)),
            VersionChangeLevel::Minor
        );
        assert_eq!(
            VersionChangeLevel::classify(&structured(4, 20, 1), &structured(4, 20, 0)),
            VersionChangeLevel::Patch
        );
    }

    #[test]
    fn test_classify_opaque_is_unknown() {
        let opaque = PackageVersion::Opaque("1.0.0.post0".to_string());
        assert_eq!(
            VersionChangeLevel::classify(&opaque, &structured(2, 0, 0)),
            VersionChangeLevel::Unknown
        );
        assert_eq!(
            VersionChangeLevel::classify(&structured(1, 0, 0), &opaque),
            VersionChangeLevel::Unknown
        );
    }

    #[test]
    fn test_classify_prerelease_only_is_unknown() {
        let old = PackageVersion::parse("1.0.0-rc.1");
        let new = PackageVersion::parse("1.0.0");
        assert_ne!(old, new);
        assert_eq!(
            VersionChangeLevel::classify(&old, &new),
            VersionChangeLevel::Unknown
        );
    }

    #[test]
    fn test_level_order() {
        assert!(VersionChangeLevel::Major < VersionChangeLevel::Minor);
        assert!(VersionChangeLevel::Minor < VersionChangeLevel::Patch);
        assert!(VersionChangeLevel::Patch < VersionChangeLevel::Unknown);
    }

    #[test]
    fn test_gitmoji_mapping() {
        let cases = [
            (VersionChangeLevel::Major, ":collision:"),
            (VersionChangeLevel::Minor, ":sparkles:"),
            (VersionChangeLevel::Patch, ":hammer_and_wrench:"),
            (VersionChangeLevel::Unknown, ":question:"),
        ];
        for (level, expected) in cases {
            assert_eq!(gitmoji(level), expected);
        }
    }

    #[test]
    fn test_all_levels_have_distinct_gitmoji() {
        let mut markers: Vec<&str> = VersionChangeLevel::ALL.iter().map(|l| gitmoji(*l)).collect();
        markers.sort();
        markers.dedup();
        assert_eq!(markers.len(), VersionChangeLevel::ALL.len());
        for marker in markers {
            assert!(marker.starts_with(':') && marker.ends_with(':'));
        }
    }

    #[test]
    fn test_sort_by_change_level() {
        let packages = vec![
            update("patch-pkg", structured(1, 0, 0), structured(1, 0, 1)),
            update("major-pkg", structured(1, 0, 0), structured(2, 0, 0)),
            update(
                "string-pkg",
                PackageVersion::parse("1.0.0.post0"),
                PackageVersion::parse("1.0.1.post0"),
            ),
            update("minor-pkg", structured(1, 0, 0), structured(1, 1, 0)),
        ];

        let sorted = sort_by_change_level(packages);
        let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["major-pkg", "minor-pkg", "patch-pkg", "string-pkg"]);
    }

    #[test]
    fn test_sort_same_level_by_name() {
        let packages = vec![
            update("minor-pkg", structured(2, 1, 0), structured(2, 2, 0)),
            update("beta-pkg", structured(1, 5, 3), structured(3, 0, 0)),
            update("alpha-pkg", structured(1, 0, 0), structured(2, 0, 0)),
        ];

        let sorted = sort_by_change_level(packages);
        let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha-pkg", "beta-pkg", "minor-pkg"]);
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_by_change_level(Vec::new()).is_empty());
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&VersionChangeLevel::Major).unwrap(),
            "\"major\""
        );
        assert_eq!(VersionChangeLevel::Unknown.as_str(), "unknown");
    }
}
