#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use crate::engine::{OutputTarget, Resolved};
use crate::router::RoutingResult;
use crate::types::ArgKind;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

/// Width of the label column, wide enough for the longest category name
const LABEL_WIDTH: usize = 14;

/// Human-readable output formatter
///
/// Lists routed arguments and the request resolved from them.
pub struct HumanFormatter {
    color_choice: ColorChoice,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanFormatter { color_choice }
    }

    /// Format without colors
    ///
    /// Returns a formatted string suitable for terminal display.
    pub fn format(&self, arguments: &RoutingResult<ArgKind>, resolved: &Resolved) -> String {
        let mut buffer = NoColor::new(Vec::new());
        // Writing to a Vec cannot fail
        let _ = self.write_to(&mut buffer, arguments, resolved);
        String::from_utf8_lossy(&buffer.into_inner()).into_owned()
    }

    /// Write the formatted output to stdout with colors
    pub fn write_to_stdout(
        &self,
        arguments: &RoutingResult<ArgKind>,
        resolved: &Resolved,
    ) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.write_to(&mut stdout, arguments, resolved)
    }

    fn write_to<W: WriteColor>(
        &self,
        out: &mut W,
        arguments: &RoutingResult<ArgKind>,
        resolved: &Resolved,
    ) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(out, "Arguments:")?;
        out.reset()?;
        writeln!(out)?;

        // Fixed category order keeps output stable across runs
        for kind in ArgKind::ALL {
            let Some(value) = arguments.get(&kind) else {
                continue;
            };

            write!(out, "  ")?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(out, "{:<width$}", kind.as_str(), width = LABEL_WIDTH)?;
            out.reset()?;

            if kind.is_switch() {
                writeln!(out, "on")?;
            } else if value.is_empty() {
                out.set_color(ColorSpec::new().set_dimmed(true))?;
                writeln!(out, "(empty)")?;
                out.reset()?;
            } else {
                writeln!(out, "{}", value)?;
            }
        }

        writeln!(out)?;
        out.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(out, "Request:")?;
        out.reset()?;
        writeln!(out)?;

        let request = &resolved.request;
        write_field(out, "input", &request.input.display().to_string())?;
        write_field(out, "output", &request.output.to_string())?;
        if let Some(copyright) = &request.copyright {
            write_field(out, "copyright", copyright)?;
        }
        if let Some(timestamp) = &request.timestamp_format {
            write_field(out, "timestamp", timestamp)?;
        }
        write_field(
            out,
            "mode",
            match (&request.output, request.options.pretty_print) {
                (OutputTarget::Discard, _) => "syntax check",
                (_, true) => "pretty print",
                (_, false) => "compact",
            },
        )?;
        write_field(
            out,
            "issues",
            if resolved.issues_as_warnings {
                "warnings"
            } else {
                "errors"
            },
        )?;

        Ok(())
    }
}

fn write_field<W: WriteColor>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    write!(out, "  ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{:<width$}", label, width = LABEL_WIDTH)?;
    out.reset()?;
    writeln!(out, "{}", value)
}
