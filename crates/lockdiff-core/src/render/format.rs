use crate::errors::LockDiffError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Markdown style of the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One markdown table per section
    #[default]
    Table,
    /// One inline line per package, with gitmoji change markers
    Simple,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Simple => "simple",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = LockDiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "simple" => Ok(OutputFormat::Simple),
            other => Err(LockDiffError::UnknownOutputFormat {
                value: other.to_string(),
            }),
        }
    }
}
