//! Error handling for lockdiff-store
//!
//! Wraps lockdiff-core ExError with store-specific helpers

use lockdiff_core::errors::{ExError, ExErrorKind, LockDiffError};
use std::path::Path;
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Failures specific to retrieving lockfiles from version control
#[derive(Error, Debug)]
pub enum StoreError {
    /// The base revision identifier is empty
    #[error("Base revision must not be empty")]
    EmptyRevision,

    /// The git executable could not be started
    #[error("Failed to run git: {0}")]
    GitUnavailable(#[source] std::io::Error),

    /// `git show` produced bytes that are not UTF-8
    #[error("uv.lock at revision {revision} is not valid UTF-8")]
    NonUtf8Lockfile { revision: String },
}

impl From<StoreError> for ExError {
    fn from(err: StoreError) -> Self {
        let kind = match &err {
            StoreError::EmptyRevision => ExErrorKind::InvalidInput,
            StoreError::GitUnavailable(_) => ExErrorKind::ExternalService,
            StoreError::NonUtf8Lockfile { .. } => ExErrorKind::InvalidLockfile,
        };
        ExError::new(kind)
            .with_op("read_base_lockfile")
            .with_message(err.to_string())
    }
}

/// Create an invalid lockfile error for a document at `path`
pub fn invalid_lockfile(path: &str, reason: impl Into<String>) -> ExError {
    ExError::from(LockDiffError::MalformedLockfile {
        reason: reason.into(),
    })
    .with_path(path)
}

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation)
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}
