//! Diff command
//!
//! Usage: lockdiff diff <OLD_LOCKFILE> <NEW_LOCKFILE> [--output-format simple]

use clap::{ArgAction, Args};
use lockdiff_core::diff::compute_diff;
use lockdiff_core::render::{render_markdown, OutputFormat};
use lockdiff_store::read_lockfile_file;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Old lockfile
    pub old: PathBuf,

    /// New lockfile
    pub new: PathBuf,

    /// Markdown style: `table` or `simple`
    #[arg(long, default_value = "table", env = "LOCKDIFF_OUTPUT_FORMAT")]
    pub output_format: OutputFormat,

    /// Append the semantic-versioning legend and link (simple style only)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub show_learn_more_link: bool,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> anyhow::Result<()> {
    let old = read_lockfile_file(&args.old)?;
    let new = read_lockfile_file(&args.new)?;

    let changes = compute_diff(Some(&old), Some(&new));
    println!(
        "{}",
        render_markdown(&changes, args.output_format, args.show_learn_more_link)
    );

    Ok(())
}
