#![forbid(unsafe_code)]

//! Command-line definition
//!
//! Options for this front end come first; everything from the first
//! compactor argument on (`/IN:site.css`, `/PRETTY`, ...) is collected
//! verbatim and handed to the prefix router.

use crate::config::{ColorOption, Config};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "csscompactor", version)]
#[command(about = "Cascading StyleSheet compactor and syntax validator front end", long_about = None)]
#[command(after_help = "Compactor arguments: /IN:file [ /OUT:file ] [ /INFO:copyright ] [ /TIME:timeFormat ] [ /SYNTAX ] [ /WARNING ] [ /PRETTY ]")]
pub struct Cli {
    /// Config file to use instead of ./csscompactor.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// When to use colors (overrides the config file)
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Match argument prefixes case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Compactor arguments
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Jsonl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<crate::config::OutputFormat> for OutputFormat {
    fn from(format: crate::config::OutputFormat) -> Self {
        match format {
            crate::config::OutputFormat::Human => OutputFormat::Human,
            crate::config::OutputFormat::Jsonl => OutputFormat::Jsonl,
        }
    }
}

impl From<ColorOption> for ColorChoice {
    fn from(color: ColorOption) -> Self {
        match color {
            ColorOption::Auto => ColorChoice::Auto,
            ColorOption::Always => ColorChoice::Always,
            ColorOption::Never => ColorChoice::Never,
        }
    }
}

impl From<ColorChoice> for termcolor::ColorChoice {
    fn from(color: ColorChoice) -> Self {
        match color {
            ColorChoice::Auto => termcolor::ColorChoice::Auto,
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

impl Cli {
    /// Output format after applying command-line overrides to `config`
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        self.format
            .unwrap_or_else(|| OutputFormat::from(config.output.format))
    }

    /// Color choice after applying command-line overrides to `config`
    pub fn color_choice(&self, config: &Config) -> ColorChoice {
        self.color
            .unwrap_or_else(|| ColorChoice::from(config.output.color))
    }

    /// Applies `--case-sensitive`; the flag can only turn case sensitivity on
    pub fn apply_overrides(&self, config: &mut Config) {
        if self.case_sensitive {
            config.router.case_sensitive = true;
        }
    }

    /// Default tracing filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
