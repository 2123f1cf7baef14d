#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. One argument record per routed category (in category order)
//! 2. One request record

use crate::engine::{CompactRequest, Resolved};
use crate::router::RoutingResult;
use crate::types::ArgKind;
use serde::Serialize;

/// JSONL output formatter
///
/// Formats routed arguments and the resolved request as JSON Lines.
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format routed arguments and the resolved request as JSONL
    pub fn format(&self, arguments: &RoutingResult<ArgKind>, resolved: &Resolved) -> String {
        let mut output = String::new();

        for kind in ArgKind::ALL {
            let Some(value) = arguments.get(&kind) else {
                continue;
            };

            let record = ArgumentRecord {
                record_type: "argument",
                kind,
                value,
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        let record = RequestRecord {
            record_type: "request",
            request: &resolved.request,
            issues_as_warnings: resolved.issues_as_warnings,
            notices: &resolved.notices,
        };
        if let Ok(json) = serde_json::to_string(&record) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Argument record for JSONL output
#[derive(Debug, Serialize)]
struct ArgumentRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    kind: ArgKind,
    value: &'a str,
}

/// Request record for JSONL output
#[derive(Debug, Serialize)]
struct RequestRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    #[serde(flatten)]
    request: &'a CompactRequest,
    issues_as_warnings: bool,
    notices: &'a [String],
}
