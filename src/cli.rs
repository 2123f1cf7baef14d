//! CLI argument parsing and command dispatch

pub mod args;
pub mod dispatch;
pub mod help;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, OutputFormat};
pub use dispatch::{DispatchError, run};
