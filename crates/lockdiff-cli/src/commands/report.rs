//! Report command
//!
//! Usage: lockdiff report --base-sha <SHA> --base-path <DIR> --output-path <FILE>

use anyhow::Context;
use clap::{ArgAction, Args};
use lockdiff_core::diff::compute_diff;
use lockdiff_core::render::{LockfileReport, OutputFormat};
use lockdiff_store::{read_base_lockfile, read_lockfile, write_report};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Base revision to compare against (commit SHA, branch or tag)
    #[arg(long)]
    pub base_sha: String,

    /// Project directory containing uv.lock (also the git working directory)
    #[arg(long)]
    pub base_path: PathBuf,

    /// Where to write the JSON report
    #[arg(long)]
    pub output_path: PathBuf,

    /// Markdown style: `table` or `simple`
    #[arg(long, default_value = "table", env = "LOCKDIFF_OUTPUT_FORMAT")]
    pub output_format: OutputFormat,

    /// Append the semantic-versioning legend and link (simple style only)
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub show_learn_more_link: bool,
}

/// Execute report command
pub fn execute(args: ReportArgs) -> anyhow::Result<()> {
    let old = read_base_lockfile(&args.base_sha, &args.base_path)
        .with_context(|| format!("reading uv.lock at {}", args.base_sha))?;
    let new = read_lockfile(&args.base_path)
        .with_context(|| format!("reading uv.lock in {}", args.base_path.display()))?;

    let changes = compute_diff(old.as_ref(), new.as_ref());
    let report = LockfileReport::new(&changes, args.output_format, args.show_learn_more_link);

    write_report(&report, &args.output_path)?;

    tracing::info!(
        output_path = %args.output_path.display(),
        items = report.items,
        "report written"
    );
    println!(
        "✓ Wrote {} change(s) to {}",
        report.items,
        args.output_path.display()
    );

    Ok(())
}
