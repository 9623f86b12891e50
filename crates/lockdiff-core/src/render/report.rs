//! Machine-readable report record.

use crate::diff::classify::VersionChangeLevel;
use crate::diff::model::{LockfileChanges, RequiresPythonChange, UpdatedPackage};
use crate::errors::{ExError, LockDiffError, Result};
use crate::model::PackageRecord;
use crate::render::format::OutputFormat;
use crate::render::markdown::render_markdown;
use serde::{Deserialize, Serialize};

/// An updated package together with its change level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedUpdate {
    #[serde(flatten)]
    pub package: UpdatedPackage,
    pub change_level: VersionChangeLevel,
}

impl From<&UpdatedPackage> for ReportedUpdate {
    fn from(package: &UpdatedPackage) -> Self {
        Self {
            change_level: package.change_level(),
            package: package.clone(),
        }
    }
}

/// The record written to the output path
///
/// Mirrors [`LockfileChanges`] and carries the rendered markdown so that
/// downstream steps can post it without re-rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockfileReport {
    pub added: Vec<PackageRecord>,
    pub removed: Vec<PackageRecord>,
    pub updated: Vec<ReportedUpdate>,
    pub requires_python: RequiresPythonChange,
    pub items: usize,
    pub markdown: String,
}

impl LockfileReport {
    /// Build the record, rendering markdown in the requested style
    pub fn new(changes: &LockfileChanges, format: OutputFormat, show_learn_more_link: bool) -> Self {
        Self {
            added: changes.added().to_vec(),
            removed: changes.removed().to_vec(),
            updated: changes.updated().iter().map(ReportedUpdate::from).collect(),
            requires_python: changes.requires_python().clone(),
            items: changes.items(),
            markdown: render_markdown(changes, format, show_learn_more_link),
        }
    }

    /// Serialize to compact JSON
    ///
    /// # Errors
    ///
    /// Returns a `Serialization` error if the record cannot be encoded.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            ExError::from(LockDiffError::from(e)).with_op("report_to_json")
        })
    }

    /// Parse a record previously produced by [`LockfileReport::to_json`]
    ///
    /// # Errors
    ///
    /// Returns a `Serialization` error if the input is not a valid record.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            ExError::from(LockDiffError::from(e)).with_op("report_from_json")
        })
    }
}
