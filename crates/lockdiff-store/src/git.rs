//! Base lockfile retrieval from git
//!
//! Runs `git show <sha>:uv.lock` inside the project directory. A revision
//! without a lockfile is a normal situation (the lockfile may be new) and
//! yields `Ok(None)`.

#![allow(clippy::result_large_err)]

use crate::errors::{Result, StoreError};
use crate::lockfile::{parse_lockfile_str, LOCKFILE_NAME};
use lockdiff_core::errors::ExError;
use lockdiff_core::model::LockfileSnapshot;
use lockdiff_core::{log_op_end, log_op_error, log_op_start};
use std::path::Path;
use std::process::Command;
use std::time::Instant;

/// The `<revision>:uv.lock` object name passed to `git show`
pub fn lockfile_object(base_sha: &str) -> String {
    format!("{}:{}", base_sha, LOCKFILE_NAME)
}

/// Read and parse uv.lock as of `base_sha`
///
/// # Errors
///
/// - `InvalidInput` if `base_sha` is empty
/// - `ExternalService` if git cannot be started (not installed, missing
///   `base_path`)
/// - `InvalidLockfile` if the historical lockfile is not valid
pub fn read_base_lockfile(base_sha: &str, base_path: &Path) -> Result<Option<LockfileSnapshot>> {
    let start = Instant::now();
    log_op_start!("read_base_lockfile", base_sha = base_sha);

    let result = show_lockfile(base_sha, base_path).and_then(|content| match content {
        Some(content) => parse_lockfile_str(&content, &lockfile_object(base_sha)).map(Some),
        None => Ok(None),
    });

    match &result {
        Ok(snapshot) => {
            log_op_end!(
                "read_base_lockfile",
                duration_ms = start.elapsed().as_millis() as u64,
                found = snapshot.is_some()
            );
        }
        Err(err) => {
            log_op_error!(
                "read_base_lockfile",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }
    result
}

fn show_lockfile(base_sha: &str, base_path: &Path) -> Result<Option<String>> {
    if base_sha.trim().is_empty() {
        return Err(StoreError::EmptyRevision.into());
    }

    let object = lockfile_object(base_sha);
    let output = Command::new("git")
        .arg("show")
        .arg(&object)
        .current_dir(base_path)
        .output()
        .map_err(|e| ExError::from(StoreError::GitUnavailable(e)).with_path(object.clone()))?;

    if !output.status.success() {
        tracing::info!(base_sha = base_sha, "uv.lock not found in base commit");
        tracing::debug!(
            exit_code = output.status.code(),
            stderr = %String::from_utf8_lossy(&output.stderr).trim(),
            "git show failed"
        );
        return Ok(None);
    }

    tracing::info!(base_sha = base_sha, "Found uv.lock in base commit.");
    String::from_utf8(output.stdout)
        .map(Some)
        .map_err(|_| {
            StoreError::NonUtf8Lockfile {
                revision: base_sha.to_string(),
            }
            .into()
        })
}
