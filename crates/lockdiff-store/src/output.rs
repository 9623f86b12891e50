//! Report persistence
//!
//! Writes the JSON report with the temp→rename pattern so a reader never
//! sees a partial file

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, Result};
use lockdiff_core::render::LockfileReport;
use lockdiff_core::{log_op_end, log_op_error, log_op_start};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Serialize `report` as JSON and write it to `output_path`
///
/// Parent directories are created as needed. An existing file is replaced.
///
/// # Errors
///
/// - `Serialization` if the report cannot be encoded
/// - `Io` if the file cannot be written
pub fn write_report(report: &LockfileReport, output_path: &Path) -> Result<()> {
    let start = Instant::now();
    log_op_start!("write_report", output_path = %output_path.display());

    let result = report
        .to_json()
        .and_then(|json| atomic_write(output_path, json.as_bytes()));

    match &result {
        Ok(()) => {
            log_op_end!(
                "write_report",
                duration_ms = start.elapsed().as_millis() as u64,
                items = report.items
            );
        }
        Err(err) => {
            log_op_error!(
                "write_report",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
        }
    }
    result
}

fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error("create_output_dir", parent, e))?;
    }

    let temp_path = target_path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| io_error("write_report_temp", &temp_path, e))?;
    fs::rename(&temp_path, target_path)
        .map_err(|e| io_error("rename_report_temp", target_path, e))?;

    Ok(())
}
