#![forbid(unsafe_code)]

//! Typed view of routed arguments and its resolution into a request

use super::compactor::{CompactOptions, CompactRequest, OutputTarget};
use crate::router::RoutingResult;
use crate::types::ArgKind;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Notice emitted when an output file is combined with syntax-only mode
pub const SYNTAX_ONLY_OUTPUT_NOTICE: &str = "Cannot specify an output file when using /SYNTAX";

/// Reasons routed arguments cannot become a [`CompactRequest`]
///
/// Both variants are usage errors: the caller should show the help text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationError {
    #[error("No input file specified")]
    MissingInput,

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
}

/// The arguments of one compactor run, as given on the command line
///
/// Value categories hold `None` when absent or empty. Switches only record
/// presence; any text after their prefix is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    pub input_file: Option<String>,
    pub output_file: Option<String>,
    pub copyright: Option<String>,
    pub timestamp_format: Option<String>,
    pub syntax_only: bool,
    pub warning: bool,
    pub pretty_print: bool,
}

/// A request ready for the engine plus how to present its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub request: CompactRequest,
    /// Report parse issues as warnings instead of errors
    pub issues_as_warnings: bool,
    /// Non-fatal remarks about the arguments, meant for stderr
    pub notices: Vec<String>,
}

impl Invocation {
    pub fn from_routing(result: &RoutingResult<ArgKind>) -> Self {
        let text = |kind: ArgKind| {
            result
                .get(&kind)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Invocation {
            input_file: text(ArgKind::InputFile),
            output_file: text(ArgKind::OutputFile),
            copyright: text(ArgKind::Copyright),
            timestamp_format: text(ArgKind::TimeStamp),
            syntax_only: result.contains(&ArgKind::SyntaxOnly),
            warning: result.contains(&ArgKind::Warning),
            pretty_print: result.contains(&ArgKind::PrettyPrint),
        }
    }

    /// Checks the input file and decides where output goes
    ///
    /// Syntax-only runs discard output, even when an output file was given
    /// (a notice is recorded). Without an output file, output goes to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if no input file was given or it is not an existing
    /// file.
    pub fn into_request(self) -> Result<Resolved, InvocationError> {
        let input = PathBuf::from(self.input_file.ok_or(InvocationError::MissingInput)?);
        if !input.is_file() {
            return Err(InvocationError::InputNotFound(input));
        }

        let mut notices = Vec::new();
        let output = match (self.syntax_only, self.output_file) {
            (true, Some(_)) => {
                notices.push(SYNTAX_ONLY_OUTPUT_NOTICE.to_string());
                OutputTarget::Discard
            }
            (true, None) => OutputTarget::Discard,
            (false, None) => OutputTarget::Stdout,
            (false, Some(path)) => OutputTarget::File(PathBuf::from(path)),
        };

        let request = CompactRequest {
            input,
            output,
            copyright: self.copyright,
            timestamp_format: self.timestamp_format,
            options: CompactOptions {
                pretty_print: self.pretty_print,
                overwrite: true,
            },
        };
        debug!(input = %request.input.display(), output = %request.output, "resolved compaction request");

        Ok(Resolved {
            request,
            issues_as_warnings: self.warning,
            notices,
        })
    }
}
