//! Version parsing with graceful degradation.
//!
//! Python lockfiles carry versions that are frequently not valid semver
//! (`2.9.0.post0`, `1.0.0rc1`, `2024.1`). Parsing proceeds in two steps:
//!
//! 1. [`parse_strict`] accepts the semver grammar with optional minor and
//!    patch components (defaulted to zero).
//! 2. [`coerce`] searches for the first `major[.minor[.patch]]` run anywhere in
//!    the string and returns it together with the unparsed remainder.
//!
//! [`PackageVersion::parse`] composes both and never fails.

use lazy_regex::{regex, regex_captures};
use semver::{BuildMetadata, Prerelease, Version};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Strictly parse a semantic version, allowing minor and patch to be omitted.
///
/// Returns `None` for anything outside the grammar, including a leading `v`,
/// leading zeros in numeric components and PEP 440 suffixes such as `.post0`.
pub fn parse_strict(raw: &str) -> Option<Version> {
    let (_, major, minor, patch, pre, build) = regex_captures!(
        r"^(0|[1-9]\d*)(?:\.(0|[1-9]\d*)(?:\.(0|[1-9]\d*))?)?(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
        raw
    )?;

    let mut version = Version::new(
        major.parse().ok()?,
        component(minor)?,
        component(patch)?,
    );
    if !pre.is_empty() {
        version.pre = Prerelease::new(pre).ok()?;
    }
    if !build.is_empty() {
        version.build = BuildMetadata::new(build).ok()?;
    }
    Some(version)
}

/// Best-effort conversion of an incomplete version string.
///
/// Finds the leftmost `[vV]?major[.minor[.patch]]` run anywhere in `raw`.
/// Missing components are set to zero. The second element is everything
/// after the matched span; when nothing matches it is the whole input.
///
/// ```
/// use lockdiff_core::version::coerce;
///
/// let (version, rest) = coerce("2.9.0.post0");
/// assert_eq!(version.unwrap().to_string(), "2.9.0");
/// assert_eq!(rest, ".post0");
/// ```
pub fn coerce(raw: &str) -> (Option<Version>, String) {
    let re = regex!(r"[vV]?(0|[1-9]\d*)(?:\.(0|[1-9]\d*)(?:\.(0|[1-9]\d*))?)?");

    let Some(caps) = re.captures(raw) else {
        return (None, raw.to_string());
    };

    let numbers = (
        caps.get(1).map(|m| m.as_str()).unwrap_or_default().parse::<u64>(),
        component(caps.get(2).map(|m| m.as_str()).unwrap_or_default()),
        component(caps.get(3).map(|m| m.as_str()).unwrap_or_default()),
    );
    // Components too large for u64 cannot be represented; treat as no match.
    let (Ok(major), Some(minor), Some(patch)) = numbers else {
        return (None, raw.to_string());
    };

    let end = caps.get(0).map(|m| m.end()).unwrap_or(raw.len());
    (Some(Version::new(major, minor, patch)), raw[end..].to_string())
}

/// Parse an optional numeric component, treating an empty capture as zero.
fn component(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        Some(0)
    } else {
        digits.parse().ok()
    }
}

/// A package version: structured semver when possible, exact text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PackageVersion {
    /// A fully structured semantic version
    Structured(Version),
    /// Text that could not be (fully) structured, kept verbatim
    Opaque(String),
}

impl PackageVersion {
    /// Parse a raw lockfile version string.
    ///
    /// Strict semver wins. Otherwise a coerced prefix with no remainder is
    /// structured, a coerced prefix with a remainder is kept as opaque text
    /// (`prefix + remainder`), and input with no numeric prefix is opaque
    /// as-is.
    pub fn parse(raw: &str) -> Self {
        if let Some(version) = parse_strict(raw) {
            return PackageVersion::Structured(version);
        }

        match coerce(raw) {
            (Some(version), rest) if rest.is_empty() => PackageVersion::Structured(version),
            (Some(version), rest) => PackageVersion::Opaque(format!("{}{}", version, rest)),
            (None, _) => PackageVersion::Opaque(raw.to_string()),
        }
    }

    /// The structured version, if this is one
    pub fn as_semver(&self) -> Option<&Version> {
        match self {
            PackageVersion::Structured(version) => Some(version),
            PackageVersion::Opaque(_) => None,
        }
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, PackageVersion::Opaque(_))
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageVersion::Structured(version) => write!(f, "{}", version),
            PackageVersion::Opaque(text) => f.write_str(text),
        }
    }
}

impl From<Version> for PackageVersion {
    fn from(version: Version) -> Self {
        PackageVersion::Structured(version)
    }
}

impl Serialize for PackageVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PackageVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(PackageVersion::parse(&raw))
    }
}
