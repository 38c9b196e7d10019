//! Category grouping and gap-filling.
//!
//! Recipes are grouped by the category part of their document path into a
//! lexically sorted map. Every ancestor of a populated category, down to
//! the root (empty path), is then inserted with an empty recipe list so no
//! category is orphaned.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::RecipeDescriptor;
use crate::docgen::error::DocsError;
use crate::docgen::path::{PATH_SEPARATOR, PathResolver, RecipePath};

/// Path of the root category.
pub const ROOT_CATEGORY: &str = "";

/// Display title of the root category.
pub const ROOT_TITLE: &str = "Recipes";

/// A catalog recipe paired with its resolved document path.
#[derive(Debug, Clone)]
pub struct CategorizedRecipe<'a> {
    /// The descriptor, borrowed from the catalog.
    pub descriptor: &'a RecipeDescriptor,
    /// Its document path.
    pub path: RecipePath,
}

/// Resolves every recipe's path, in catalog order.
///
/// Two recipes whose names differ only in case, or an override landing on
/// another recipe's path, would share a document; that is rejected.
///
/// # Errors
///
/// Fails on the first name the resolver rejects, and with
/// `DocsError::InvalidPath` on the first path already taken.
pub fn resolve_all<'a>(
    recipes: &'a [RecipeDescriptor],
    resolver: &PathResolver,
) -> Result<Vec<CategorizedRecipe<'a>>, DocsError> {
    let mut seen = BTreeSet::new();
    let mut resolved = Vec::with_capacity(recipes.len());
    for descriptor in recipes {
        let path = resolver.resolve(&descriptor.name)?;
        if !seen.insert(path.clone()) {
            return Err(DocsError::InvalidPath {
                name: descriptor.name.clone(),
                path: path.to_string(),
                reason: "document path already used by another recipe",
            });
        }
        resolved.push(CategorizedRecipe { descriptor, path });
    }
    Ok(resolved)
}

/// Sorted mapping from category path to the recipes directly in it.
#[derive(Debug, Clone, Default)]
pub struct CategoryTree<'a> {
    nodes: BTreeMap<String, Vec<CategorizedRecipe<'a>>>,
}

impl<'a> CategoryTree<'a> {
    /// Groups recipes by category and fills in missing ancestors.
    ///
    /// Recipes keep their catalog order within a category. The root
    /// category is always present.
    #[must_use]
    pub fn build(recipes: &[CategorizedRecipe<'a>]) -> Self {
        let mut nodes: BTreeMap<String, Vec<CategorizedRecipe<'a>>> = BTreeMap::new();
        for recipe in recipes {
            nodes
                .entry(recipe.path.category().to_string())
                .or_default()
                .push(recipe.clone());
        }

        let populated: Vec<String> = nodes.keys().cloned().collect();
        for category in &populated {
            let mut current = Some(category.as_str());
            while let Some(path) = current {
                if !nodes.contains_key(path) {
                    tracing::trace!(category = path, "adding intermediate category");
                    nodes.insert(path.to_string(), Vec::new());
                }
                current = parent_category(path);
            }
        }
        nodes.entry(ROOT_CATEGORY.to_string()).or_default();

        Self { nodes }
    }

    /// Whether `category` has a node.
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.nodes.contains_key(category)
    }

    /// Recipes directly in `category`.
    #[must_use]
    pub fn recipes(&self, category: &str) -> Option<&[CategorizedRecipe<'a>]> {
        self.nodes.get(category).map(Vec::as_slice)
    }

    /// Categories in lexical order with their direct recipes.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CategorizedRecipe<'a>])> {
        self.nodes.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Names (last segments) of the direct children of `parent`, sorted.
    ///
    /// Only categories exactly one segment below `parent` qualify;
    /// grandchildren are listed by their own parent.
    #[must_use]
    pub fn subcategories(&self, parent: &str) -> BTreeSet<&str> {
        self.nodes
            .keys()
            .filter_map(|key| child_name(parent, key))
            .collect()
    }
}

/// Returns the last segment of `key` if it is a direct child of `parent`.
fn child_name<'k>(parent: &str, key: &'k str) -> Option<&'k str> {
    let rest = if parent.is_empty() {
        key
    } else {
        key.strip_prefix(parent)?.strip_prefix(PATH_SEPARATOR)?
    };
    (!rest.is_empty() && !rest.contains(PATH_SEPARATOR)).then_some(rest)
}

/// Parent of a category path; `None` for the root.
#[must_use]
pub fn parent_category(path: &str) -> Option<&str> {
    if path.is_empty() {
        return None;
    }
    Some(path.rfind(PATH_SEPARATOR).map_or(ROOT_CATEGORY, |i| &path[..i]))
}

/// Number of separators in a category path.
#[must_use]
pub fn category_depth(path: &str) -> usize {
    path.matches(PATH_SEPARATOR).count()
}

/// Display title: the capitalized last segment, or [`ROOT_TITLE`].
#[must_use]
pub fn category_title(path: &str) -> String {
    if path.is_empty() {
        return ROOT_TITLE.to_string();
    }
    let name = path.rfind(PATH_SEPARATOR).map_or(path, |i| &path[i + 1..]);
    capitalize(name)
}

/// Upper-cases the first character.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
