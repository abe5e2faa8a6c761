//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod list;
pub mod run;
pub mod table;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::HandshakePdaError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// A bare invocation (no subcommand) is a `run` with the root arguments.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), HandshakePdaError> {
    match cli.command {
        None => run::run(&cli.run),
        Some(Commands::Run(args)) => run::run(&args),
        Some(Commands::List(args)) => list::run(&args),
        Some(Commands::Table(args)) => table::run(&args),
        Some(Commands::Completions(args)) => completions::run(&args),
        Some(Commands::Version(args)) => version::run(&args),
    }
}
