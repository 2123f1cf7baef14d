//! Configuration file parsing and validation

pub mod compactor_toml;

pub use compactor_toml::{
    CONFIG_FILE_NAME, ColorOption, Config, ConfigError, OutputConfig, OutputFormat, PrefixEntry,
    RouterConfig,
};
