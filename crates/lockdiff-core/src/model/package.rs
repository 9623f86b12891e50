use crate::version::PackageVersion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single resolved package from a lockfile
///
/// Two records are equal when both name and version are equal. The version is
/// `None` for local and editable packages, whose lockfile entries carry no
/// `version` key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageRecord {
    /// Package name as written in the lockfile
    pub name: String,

    /// Resolved version, absent for local/editable packages
    pub version: Option<PackageVersion>,
}

impl PackageRecord {
    /// Build a record from raw lockfile values
    ///
    /// The raw version goes through [`PackageVersion::parse`], so this never
    /// fails on odd version strings.
    pub fn new(name: impl Into<String>, raw_version: Option<&str>) -> Self {
        Self {
            name: name.into(),
            version: raw_version.map(PackageVersion::parse),
        }
    }

    /// Build a record from an already-parsed version
    pub fn with_version(name: impl Into<String>, version: impl Into<PackageVersion>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }

    /// True for local/editable packages without a version
    pub fn is_unversioned(&self) -> bool {
        self.version.is_none()
    }
}

impl fmt::Display for PackageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}: {}", self.name, version),
            None => write!(f, "{}: -", self.name),
        }
    }
}
