//! lockdiff CLI
//!
//! Command-line interface for reporting uv lockfile changes

use clap::{Parser, Subcommand};
use lockdiff_core::errors::LockDiffError;
use lockdiff_core::logging_facility::{init, Profile};
use std::str::FromStr;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "lockdiff")]
#[command(about = "lockdiff - Report uv lockfile changes for pull requests", long_about = None)]
struct Cli {
    /// Log output format on stderr
    #[arg(
        long,
        global = true,
        default_value = "pretty",
        env = "LOCKDIFF_LOG_FORMAT"
    )]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare uv.lock at a base commit with the working copy and write a JSON report
    Report(commands::report::ReportArgs),
    /// Compare two lockfiles on disk and print the markdown report
    Diff(commands::diff::DiffArgs),
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = LockDiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(LockDiffError::UnknownLogFormat {
                value: other.to_string(),
            }),
        }
    }
}

impl LogFormat {
    fn profile(self) -> Profile {
        match self {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init(cli.log_format.profile());

    let result = match cli.command {
        Commands::Report(args) => commands::report::execute(args),
        Commands::Diff(args) => commands::diff::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
