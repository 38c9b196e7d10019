//! Documentation generation command handler.

use crate::catalog::FileCatalog;
use crate::cli::args::Cli;
use crate::config::load_config;
use crate::docgen::DocTreeBuilder;
use crate::error::RecipeDocError;

/// Execute a documentation run.
///
/// Loads the configuration, reads the catalog and writes the tree into
/// the destination directory.
///
/// # Errors
///
/// Returns an error if configuration loading, catalog loading or
/// generation fails.
pub fn run(cli: &Cli) -> Result<(), RecipeDocError> {
    let config = load_config(cli.config.as_deref(), &cli.overrides())?;
    let catalog = FileCatalog::new(cli.catalog.clone());

    tracing::info!(
        catalog = %cli.catalog.display(),
        destination = %cli.destination.display(),
        root_prefix = %config.root_prefix,
        "starting documentation run"
    );

    let report = DocTreeBuilder::new(&config).generate(&catalog, &cli.destination)?;

    tracing::info!(
        recipes = report.recipes_written,
        categories = report.categories_written,
        tag_pages = report.tag_pages_written,
        files = report.files_written(),
        output = %report.output_root.display(),
        "documentation generated"
    );

    Ok(())
}
