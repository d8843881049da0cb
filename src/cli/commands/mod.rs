//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod figures;
pub mod index;

use crate::cli::args::{Cli, Commands};
use crate::error::BookkitError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), BookkitError> {
    match cli.command {
        Commands::Figures(args) => figures::run(&args),
        Commands::Index(args) => index::run(&args),
    }
}
