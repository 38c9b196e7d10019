//! CLI command handlers.

pub mod generate;

use crate::cli::args::Cli;
use crate::error::RecipeDocError;

/// Run a parsed CLI invocation.
///
/// # Errors
///
/// Returns an error if the generate handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), RecipeDocError> {
    generate::run(cli)
}
