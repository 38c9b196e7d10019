//! `recipedoc` - Markdown reference documentation for recipe catalogs
//!
//! This library turns a catalog of recipe descriptors into a static
//! documentation tree: one page per recipe, nested by namespace, with
//! per-category indexes and a navigation summary snippet.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod docgen;
pub mod error;
pub mod observability;

pub use catalog::{CatalogProvider, FileCatalog, RecipeDescriptor, StaticCatalog};
pub use config::GeneratorConfig;
pub use docgen::{DocTreeBuilder, GenerationReport, generate};
pub use error::RecipeDocError;
