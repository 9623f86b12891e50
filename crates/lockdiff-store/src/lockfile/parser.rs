//! Lockfile parser and reader
//!
//! Parses TOML, validates package names, and builds an immutable snapshot

#![allow(clippy::result_large_err)]

use crate::errors::{invalid_lockfile, io_error, Result};
use crate::lockfile::format::UvLockDocument;
use lockdiff_core::errors::{ExError, ExErrorKind, LockDiffError};
use lockdiff_core::model::{LockfileSnapshot, PackageRecord};
use lockdiff_core::{log_op_end, log_op_error, log_op_start};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

/// File name of the lockfile inside a project directory
pub const LOCKFILE_NAME: &str = "uv.lock";

/// Parse lockfile text into a snapshot
///
/// `origin` names where the text came from (a path or `<sha>:uv.lock`) and
/// is attached to errors.
///
/// # Errors
///
/// - `InvalidLockfile` if the text is empty, is not TOML, or lacks the
///   `package` array or a package `name`
/// - `MissingField` if a package has an empty name
pub fn parse_lockfile_str(content: &str, origin: &str) -> Result<LockfileSnapshot> {
    if content.trim().is_empty() {
        return Err(invalid_lockfile(origin, "document is empty"));
    }

    let document: UvLockDocument = toml::from_str(content)
        .map_err(|e| invalid_lockfile(origin, format!("TOML parse error: {}", e.message())))?;

    into_snapshot(document, origin)
}

fn into_snapshot(document: UvLockDocument, origin: &str) -> Result<LockfileSnapshot> {
    if let Some(index) = document.package.iter().position(|p| p.name.trim().is_empty()) {
        return Err(ExError::from(LockDiffError::EmptyPackageName { index }).with_path(origin));
    }

    let packages = document
        .package
        .iter()
        .map(|p| PackageRecord::new(p.name.as_str(), p.version.as_deref()))
        .collect();

    let snapshot = LockfileSnapshot::new(packages, document.requires_python);
    Ok(match document.version {
        Some(version) => snapshot.with_lock_metadata(version, document.revision),
        None => snapshot,
    })
}

/// Read `<base_path>/uv.lock`
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// - `Io` if the file exists but cannot be read
/// - any error from [`parse_lockfile_str`]
pub fn read_lockfile(base_path: &Path) -> Result<Option<LockfileSnapshot>> {
    let start = Instant::now();
    let path = base_path.join(LOCKFILE_NAME);
    let origin = path.display().to_string();
    log_op_start!("read_lockfile", lockfile_path = %origin);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(lockfile_path = %origin, "uv.lock not found in current working directory");
            log_op_end!(
                "read_lockfile",
                duration_ms = start.elapsed().as_millis() as u64,
                found = false
            );
            return Ok(None);
        }
        Err(e) => {
            let err = io_error("read_lockfile", &path, e);
            log_op_error!(
                "read_lockfile",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            return Err(err);
        }
    };

    match parse_lockfile_str(&content, &origin) {
        Ok(snapshot) => {
            log_op_end!(
                "read_lockfile",
                duration_ms = start.elapsed().as_millis() as u64,
                found = true,
                package_count = snapshot.len()
            );
            Ok(Some(snapshot))
        }
        Err(err) => {
            log_op_error!(
                "read_lockfile",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

/// Read and parse a lockfile at an explicit path
///
/// Unlike [`read_lockfile`], a missing file is an error.
///
/// # Errors
///
/// - `NotFound` if `path` does not exist
/// - `Io` if it cannot be read
/// - any error from [`parse_lockfile_str`]
pub fn read_lockfile_file(path: &Path) -> Result<LockfileSnapshot> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ExError::new(ExErrorKind::NotFound)
                .with_op("read_lockfile_file")
                .with_path(path.display().to_string())
                .with_message("lockfile does not exist")
        } else {
            io_error("read_lockfile_file", path, e)
        }
    })?;
    parse_lockfile_str(&content, &path.display().to_string())
}
