//! Report rendering.
//!
//! Turns [`LockfileChanges`](crate::diff::LockfileChanges) into markdown
//! for pull-request comments and into the machine-readable
//! [`LockfileReport`] record written by the CLI.
//!
//! Both markdown styles share the same section order: Python constraint
//! change, Added, Changed, Removed. Empty sections are omitted.

pub mod format;
pub mod markdown;
pub mod report;

pub use format::OutputFormat;
pub use markdown::{render_markdown, REPORT_TITLE};
pub use report::{LockfileReport, ReportedUpdate};
