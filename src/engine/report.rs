#![forbid(unsafe_code)]

//! Running a compactor and summarizing its outcome

use super::compactor::{Compactor, EngineError, OutputTarget};
use super::invocation::Resolved;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Size change between an input file and its compacted output
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub file_name: String,
    pub input_bytes: u64,
    pub output_bytes: u64,
}

impl Reduction {
    /// Fraction of the input removed, `0.0` for an empty input
    ///
    /// Negative when the output grew (pretty printing, headers).
    pub fn ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        1.0 - (self.output_bytes as f64 / self.input_bytes as f64)
    }

    pub fn message(&self) -> String {
        format!(
            "Compacted \"{}\" by {:.1}%",
            self.file_name,
            self.ratio() * 100.0
        )
    }

    fn measure(input: &Path, output: &Path) -> Result<Self, EngineError> {
        let input_bytes = fs::metadata(input)?.len();
        let output_bytes = fs::metadata(output)?.len();
        let file_name = input
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| input.display().to_string());

        Ok(Reduction {
            file_name,
            input_bytes,
            output_bytes,
        })
    }
}

/// Outcome of one compaction run
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Rendered parse issues, in the order the engine reported them
    pub diagnostics: Vec<String>,
    /// Set only for a clean run that wrote an output file
    pub reduction: Option<Reduction>,
}

impl Report {
    pub fn has_issues(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Runs `compactor` on a resolved request
///
/// Parse issues are rendered as warnings when the run asked for it. When the
/// run is clean and wrote to a file, the size reduction is measured.
///
/// # Errors
///
/// Propagates engine failures, and I/O errors while measuring file sizes.
pub fn execute(compactor: &dyn Compactor, resolved: &Resolved) -> Result<Report, EngineError> {
    let request = &resolved.request;
    let issues = compactor.compact(request)?;
    debug!(issues = issues.len(), "compactor finished");

    let diagnostics: Vec<String> = issues
        .iter()
        .map(|issue| issue.compiler_message(resolved.issues_as_warnings))
        .collect();

    let reduction = match &request.output {
        OutputTarget::File(output) if diagnostics.is_empty() => {
            let reduction = Reduction::measure(&request.input, output)?;
            info!(
                input_bytes = reduction.input_bytes,
                output_bytes = reduction.output_bytes,
                "measured size reduction"
            );
            Some(reduction)
        }
        _ => None,
    };

    Ok(Report {
        diagnostics,
        reduction,
    })
}
