//! File-backed catalog provider.
//!
//! Reads a `recipes:` document from YAML or JSON and resolves each
//! composite recipe's `recipeList` against the other catalog entries,
//! binding the configured option values onto a copy of the referenced
//! descriptor.

use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;

use super::{CatalogError, CatalogProvider, OptionDescriptor, OptionValue, RecipeDescriptor};

/// Maximum edit distance for "did you mean" suggestions.
const SUGGESTION_DISTANCE: usize = 3;

/// Type tag given to options that a reference binds but the referenced
/// recipe does not declare.
const UNDECLARED_OPTION_TYPE: &str = "String";

/// Serialization format of a catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// YAML document.
    Yaml,
    /// JSON document.
    Json,
}

impl CatalogFormat {
    /// Picks the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Document schema
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    recipes: Vec<RecipeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RecipeEntry {
    name: String,
    display_name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    options: Vec<OptionDescriptor>,
    #[serde(default)]
    recipe_list: Vec<RecipeReference>,
}

/// One `recipeList` entry: a reference plus configured option values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RecipeReference {
    name: String,
    #[serde(default)]
    options: IndexMap<String, OptionValue>,
}

// ============================================================================
// Provider
// ============================================================================

/// Catalog loaded from a YAML or JSON file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    /// Creates a provider for the catalog at `path`. Nothing is read yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogProvider for FileCatalog {
    fn list_recipe_descriptors(&self) -> Result<Vec<RecipeDescriptor>, CatalogError> {
        let format =
            CatalogFormat::from_path(&self.path).ok_or_else(|| CatalogError::UnsupportedFormat {
                path: self.path.clone(),
            })?;
        let content = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Read {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), ?format, "loading recipe catalog");
        parse_catalog(&content, format)
    }
}

/// Parses and resolves a catalog document.
///
/// # Errors
///
/// Returns `CatalogError` on syntax errors, empty names or display names,
/// duplicate names, or unresolvable recipe list references.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Vec<RecipeDescriptor>, CatalogError> {
    let document: CatalogDocument = match format {
        CatalogFormat::Yaml => serde_yaml::from_str(content)?,
        CatalogFormat::Json => serde_json::from_str(content)?,
    };
    resolve(document.recipes)
}

/// Builds descriptors from entries, then resolves recipe lists one level deep.
fn resolve(entries: Vec<RecipeEntry>) -> Result<Vec<RecipeDescriptor>, CatalogError> {
    let mut base: IndexMap<String, RecipeDescriptor> = IndexMap::with_capacity(entries.len());
    let mut references = Vec::with_capacity(entries.len());

    for entry in entries {
        check_not_empty(&entry.name, "name", &entry.name)?;
        check_not_empty(&entry.display_name, "displayName", &entry.name)?;
        if base.contains_key(&entry.name) {
            return Err(CatalogError::DuplicateRecipe { name: entry.name });
        }
        for option in &entry.options {
            check_not_empty(&option.name, "option name", &entry.name)?;
        }

        references.push(entry.recipe_list);
        base.insert(
            entry.name.clone(),
            RecipeDescriptor {
                name: entry.name,
                display_name: entry.display_name,
                description: entry.description,
                tags: entry.tags.into_iter().collect::<IndexSet<_>>(),
                options: entry.options,
                recipe_list: Vec::new(),
            },
        );
    }

    let mut resolved = Vec::with_capacity(base.len());
    for (descriptor, recipe_list) in base.values().zip(references) {
        let mut descriptor = descriptor.clone();
        descriptor.recipe_list = recipe_list
            .into_iter()
            .map(|reference| resolve_reference(&descriptor.name, reference, &base))
            .collect::<Result<_, _>>()?;
        resolved.push(descriptor);
    }

    Ok(resolved)
}

fn resolve_reference(
    parent: &str,
    reference: RecipeReference,
    base: &IndexMap<String, RecipeDescriptor>,
) -> Result<RecipeDescriptor, CatalogError> {
    check_not_empty(&reference.name, "recipeList entry name", parent)?;

    let Some(known) = base.get(&reference.name) else {
        return Err(CatalogError::UnknownReference {
            parent: parent.to_string(),
            suggestion: suggest_recipe(&reference.name, base.keys()),
            name: reference.name,
        });
    };
    let mut nested = known.clone();

    for (name, value) in reference.options {
        if let Some(option) = nested.options.iter_mut().find(|o| o.name == name) {
            option.value = Some(value);
        } else {
            nested
                .options
                .push(OptionDescriptor::new(name, UNDECLARED_OPTION_TYPE).with_value(value));
        }
    }

    Ok(nested)
}

fn check_not_empty(value: &str, field: &'static str, recipe: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::MissingField {
            field,
            recipe: recipe.to_string(),
        });
    }
    Ok(())
}

/// Returns the closest known recipe name within the suggestion distance.
fn suggest_recipe<'a>(input: &str, known: impl Iterator<Item = &'a String>) -> Option<String> {
    known
        .map(|name| (name, strsim::damerau_levenshtein(input, name)))
        .filter(|(_, dist)| *dist <= SUGGESTION_DISTANCE)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name.clone())
}
