#![forbid(unsafe_code)]

//! Request and result types exchanged with a compaction engine

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by a [`Compactor`] implementation
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Compaction failed: {0}")]
    Failed(String),
}

/// Output switches passed through to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CompactOptions {
    /// Emit indented output instead of compact output
    pub pretty_print: bool,
    /// Replace the output file if it already exists
    pub overwrite: bool,
}

/// Where the engine should write its output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "kebab-case")]
pub enum OutputTarget {
    /// Parse only; output is thrown away
    Discard,
    Stdout,
    File(PathBuf),
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Discard => f.write_str("(discarded)"),
            OutputTarget::Stdout => f.write_str("(stdout)"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Everything the engine needs for one compaction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompactRequest {
    pub input: PathBuf,
    pub output: OutputTarget,
    /// Copyright label written at the top of the output
    pub copyright: Option<String>,
    /// Format string for the timestamp written at the top of the output
    pub timestamp_format: Option<String>,
    pub options: CompactOptions,
}

/// A syntax problem found by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    pub file: PathBuf,
    pub line: u32,
    pub column: u32,
    pub message: String,
}

impl ParseIssue {
    /// Renders the issue in the `file(line,column): error: message` form
    /// understood by build tools
    pub fn compiler_message(&self, as_warning: bool) -> String {
        format!(
            "{}({},{}): {}: {}",
            self.file.display(),
            self.line,
            self.column,
            if as_warning { "warning" } else { "error" },
            self.message
        )
    }
}

/// A CSS compaction engine
///
/// Implementations parse `request.input`, write compacted (or pretty
/// printed) output to `request.output` and return every syntax issue found.
/// Issues are not errors: an `Err` means the run itself could not complete.
pub trait Compactor {
    fn compact(&self, request: &CompactRequest) -> Result<Vec<ParseIssue>, EngineError>;
}
