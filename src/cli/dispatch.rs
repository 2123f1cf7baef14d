#![forbid(unsafe_code)]

//! Command dispatch for the compactor front end
//!
//! Loads configuration, routes the raw compactor arguments, resolves them
//! into a compaction request and reports it. The CSS engine is not part of
//! this crate, so the binary stops at the resolved request; library users
//! pass it to their own [`Compactor`](crate::engine::Compactor).

use super::args::{Cli, OutputFormat};
use super::help;
use crate::config::{Config, ConfigError};
use crate::engine::{Invocation, InvocationError, Resolved};
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::router::{PrefixRouter, RouterError, RoutingResult};
use crate::types::ArgKind;
use std::io;
use thiserror::Error;
use tracing::debug;

/// Exit codes for the compactor front end
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Router(#[from] RouterError),

    #[error(transparent)]
    Invocation(#[from] InvocationError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl DispatchError {
    /// Usage errors are the user's to fix and come with the help text
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            DispatchError::Router(RouterError::UnrecognizedArgument(_))
                | DispatchError::Invocation(_)
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_usage_error() {
            EXIT_USAGE
        } else {
            EXIT_ERROR
        }
    }
}

/// Routes `tokens` and resolves them into a compaction request
///
/// # Errors
///
/// Fails on the first unrecognized token, or when the input file is missing.
pub fn resolve<S: AsRef<str>>(
    router: &PrefixRouter<ArgKind>,
    tokens: &[S],
) -> Result<(RoutingResult<ArgKind>, Resolved), DispatchError> {
    let arguments = router.route(tokens)?;
    debug!(routed = arguments.len(), "routed compactor arguments");

    let resolved = Invocation::from_routing(&arguments).into_request()?;
    Ok((arguments, resolved))
}

/// Run the front end and return the process exit code
///
/// Errors are printed to stderr; usage errors are followed by the help text.
pub fn run(cli: &Cli) -> i32 {
    match run_inner(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_usage_error() {
                eprintln!();
                eprintln!("{}", help::usage());
            }
            e.exit_code()
        }
    }
}

fn run_inner(cli: &Cli) -> Result<(), DispatchError> {
    let cwd = std::env::current_dir()?;
    let mut config = Config::discover(cli.config.as_deref(), &cwd)?;
    cli.apply_overrides(&mut config);

    let router = config.build_router()?;
    let (arguments, resolved) = resolve(&router, cli.args.as_slice())?;

    for notice in &resolved.notices {
        eprintln!("{}", notice);
    }

    match cli.output_format(&config) {
        OutputFormat::Human => {
            let formatter = HumanFormatter::new(cli.color_choice(&config).into());
            formatter.write_to_stdout(&arguments, &resolved)?;
        }
        OutputFormat::Jsonl => {
            print!("{}", JsonlFormatter::new().format(&arguments, &resolved));
        }
    }

    Ok(())
}
