#![forbid(unsafe_code)]

//! Parsing of `csscompactor.toml`
//!
//! Every section is optional. Without a `[[prefix]]` table the built-in
//! prefix table is used; when one is present it replaces the built-in table
//! entirely, in declaration order.

use crate::router::{PrefixMapping, PrefixRouter, RouterError};
use crate::types::ArgKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File looked up in the working directory when no config path is given
pub const CONFIG_FILE_NAME: &str = "csscompactor.toml";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid prefix table: {0}")]
    Router(#[from] RouterError),
}

/// Output format for resolved arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Jsonl,
}

/// When to colorize human output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    /// Match prefixes exactly instead of ignoring case
    #[serde(default)]
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub color: ColorOption,
}

/// One `[[prefix]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrefixEntry {
    pub prefix: String,
    pub kind: ArgKind,
}

/// Contents of `csscompactor.toml`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub router: RouterConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default, rename = "prefix")]
    pub prefixes: Vec<PrefixEntry>,
}

impl Config {
    /// Parses configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), prefixes = config.prefixes.len(), "loaded config");
        Ok(config)
    }

    /// Loads `path` if given, else `csscompactor.toml` in `dir` if it exists,
    /// else the defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            debug!("no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// The prefix table in effect, in registration order
    pub fn prefix_mappings(&self) -> Result<Vec<PrefixMapping<ArgKind>>, ConfigError> {
        if self.prefixes.is_empty() {
            return ArgKind::default_table()
                .into_iter()
                .map(|(prefix, kind)| PrefixMapping::new(prefix, kind).map_err(ConfigError::from))
                .collect();
        }

        self.prefixes
            .iter()
            .map(|entry| {
                PrefixMapping::new(entry.prefix.as_str(), entry.kind).map_err(ConfigError::from)
            })
            .collect()
    }

    /// Builds the argument router described by this configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Router`] if a prefix entry is empty.
    pub fn build_router(&self) -> Result<PrefixRouter<ArgKind>, ConfigError> {
        let mappings = self.prefix_mappings()?;
        Ok(PrefixRouter::new(mappings, self.router.case_sensitive))
    }
}
