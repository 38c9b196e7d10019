//! Markdown documentation tree generation.
//!
//! Turns a recipe catalog into a static documentation tree:
//!
//! - one page per recipe under the recipes directory, nested by namespace
//! - a `README.md` index in every category, the root included
//! - a summary snippet listing the whole tree for table-of-contents tools
//! - optionally a recipes-by-tag page next to the recipes directory
//!
//! The run is synchronous and single-threaded. The first error aborts it;
//! files already written are left in place.

pub mod category;
pub mod error;
pub mod index_page;
pub mod path;
pub mod recipe_page;
pub mod summary;
pub mod tags;
pub mod writer;

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::catalog::{CatalogProvider, RecipeDescriptor};
use crate::config::GeneratorConfig;

pub use category::{CategorizedRecipe, CategoryTree};
pub use error::DocsError;
pub use path::{PathResolver, RecipePath};
pub use recipe_page::UsedBy;
pub use writer::DocWriter;

use index_page::{INDEX_FILE, generate_index_page};
use recipe_page::generate_recipe_page;
use summary::generate_summary;
use tags::generate_tag_index;

/// Counts of what one generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Recipe pages written.
    pub recipes_written: usize,
    /// Category indexes written, the root included.
    pub categories_written: usize,
    /// Recipes-by-tag pages written (0 or 1).
    pub tag_pages_written: usize,
    /// Destination directory.
    pub output_root: PathBuf,
}

impl GenerationReport {
    /// Total number of files written, the summary snippet included.
    #[must_use]
    pub const fn files_written(&self) -> usize {
        self.recipes_written + self.categories_written + self.tag_pages_written + 1
    }
}

/// Generates the documentation tree for one configuration.
#[derive(Debug, Clone)]
pub struct DocTreeBuilder {
    config: GeneratorConfig,
    resolver: PathResolver,
}

impl DocTreeBuilder {
    /// Creates a builder for `config`.
    ///
    /// The configuration is expected to have passed
    /// [`GeneratorConfig::validate`].
    #[must_use]
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            config: config.clone(),
            resolver: PathResolver::from_config(config),
        }
    }

    /// Lists the catalog and writes the full tree below `destination`.
    ///
    /// # Errors
    ///
    /// Returns `DocsError` if the catalog cannot be listed, a recipe name is
    /// outside the root namespace, or a file cannot be written.
    pub fn generate<P: CatalogProvider + ?Sized>(
        &self,
        provider: &P,
        destination: &Path,
    ) -> Result<GenerationReport, DocsError> {
        let recipes = provider.list_recipe_descriptors()?;
        tracing::info!(
            recipes = recipes.len(),
            destination = %destination.display(),
            "generating recipe documentation"
        );

        let categorized = category::resolve_all(&recipes, &self.resolver)?;
        let tree = CategoryTree::build(&categorized);
        let used_by = self.used_by(&categorized)?;
        let empty = BTreeSet::new();

        let mut writer = DocWriter::new(destination, self.config.existing_files);
        let recipes_dir = self.config.recipes_dir.as_str();

        for recipe in &categorized {
            let page = generate_recipe_page(
                recipe.descriptor,
                &recipe.path,
                &self.resolver,
                used_by.get(recipe.descriptor.name.as_str()).unwrap_or(&empty),
            )?;
            writer.write(&format!("{recipes_dir}/{}", recipe.path.document()), &page)?;
        }
        let recipes_written = writer.written();

        for (category, direct) in tree.iter() {
            let page = generate_index_page(category, direct, &tree.subcategories(category));
            let file = if category.is_empty() {
                format!("{recipes_dir}/{INDEX_FILE}")
            } else {
                format!("{recipes_dir}/{category}/{INDEX_FILE}")
            };
            writer.write(&file, &page)?;
        }
        let categories_written = writer.written() - recipes_written;
        tracing::debug!(categories = categories_written, "wrote category indexes");

        let summary_links = relative_to(&self.config.summary_file, recipes_dir);
        writer.write(
            &self.config.summary_file,
            &generate_summary(&tree, &summary_links),
        )?;

        let mut tag_pages_written = 0;
        if self.config.tag_index {
            let tag_file = self.config.tag_index_file();
            let link_prefix = relative_to(&tag_file, recipes_dir);
            if let Some(page) = generate_tag_index(&categorized, &link_prefix) {
                writer.write(&tag_file, &page)?;
                tag_pages_written = 1;
            } else {
                tracing::debug!("no tagged recipes, skipping tag index");
            }
        }

        Ok(GenerationReport {
            recipes_written,
            categories_written,
            tag_pages_written,
            output_root: destination.to_path_buf(),
        })
    }

    /// Maps each recipe name to the composites whose recipe list includes it.
    fn used_by<'a>(
        &self,
        categorized: &[CategorizedRecipe<'a>],
    ) -> Result<BTreeMap<&'a str, BTreeSet<UsedBy>>, DocsError> {
        let mut map: BTreeMap<&'a str, BTreeSet<UsedBy>> = BTreeMap::new();
        for parent in categorized {
            let descriptor: &'a RecipeDescriptor = parent.descriptor;
            for nested in &descriptor.recipe_list {
                // Surface foreign nested names before anything is written.
                self.resolver.resolve(&nested.name)?;
                map.entry(nested.name.as_str()).or_default().insert(UsedBy {
                    display_name: descriptor.display_name.clone(),
                    path: parent.path.clone(),
                });
            }
        }
        Ok(map)
    }
}

/// Generates the documentation tree for `config` below `destination`.
///
/// # Errors
///
/// See [`DocTreeBuilder::generate`].
pub fn generate<P: CatalogProvider + ?Sized>(
    provider: &P,
    destination: &Path,
    config: &GeneratorConfig,
) -> Result<GenerationReport, DocsError> {
    DocTreeBuilder::new(config).generate(provider, destination)
}

/// Rewrites `target` (relative to the destination) so it can be linked from
/// the file at `from` (also relative to the destination).
///
/// Never empty: a `from` inside `target` itself yields `.`, so joined links
/// stay relative (`./java/foo.md`, not `/java/foo.md`).
fn relative_to(from: &str, target: &str) -> String {
    let from_dir: Vec<&str> = from.split('/').collect();
    let from_dir = &from_dir[..from_dir.len().saturating_sub(1)];
    let target: Vec<&str> = target.split('/').collect();

    let common = from_dir
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = vec![".."; from_dir.len() - common];
    parts.extend(&target[common..]);
    if parts.is_empty() {
        return ".".to_string();
    }
    parts.join("/")
}
