//! Recipe catalog: descriptor data model and the provider seam.
//!
//! The generator never discovers recipes itself. It is handed a
//! [`CatalogProvider`] and asks it for the full, ordered descriptor list.
//! [`StaticCatalog`] wraps an already-built list; [`file::FileCatalog`]
//! loads one from a YAML or JSON document.

pub mod file;

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexSet;
use serde::Deserialize;
use thiserror::Error;

pub use file::FileCatalog;

// ============================================================================
// Descriptors
// ============================================================================

/// Metadata describing one recipe.
///
/// Identity is [`name`](Self::name). Entries of [`recipe_list`](Self::recipe_list)
/// are copies of other catalog recipes with configured option values bound.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDescriptor {
    /// Dotted, fully qualified name (e.g. `org.openrewrite.java.Foo`).
    pub name: String,

    /// Human-readable title.
    pub display_name: String,

    /// Optional long-form description.
    pub description: Option<String>,

    /// Tags in declaration order, without duplicates.
    pub tags: IndexSet<String>,

    /// Configurable options in declaration order.
    pub options: Vec<OptionDescriptor>,

    /// Recipes this composite recipe runs, in order.
    pub recipe_list: Vec<RecipeDescriptor>,
}

impl RecipeDescriptor {
    /// Creates a descriptor with no description, tags, options or sub-recipes.
    #[must_use]
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            description: None,
            tags: IndexSet::new(),
            options: Vec::new(),
            recipe_list: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a tag. Duplicate tags are ignored.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Appends an option.
    #[must_use]
    pub fn with_option(mut self, option: OptionDescriptor) -> Self {
        self.options.push(option);
        self
    }

    /// Appends a nested recipe.
    #[must_use]
    pub fn with_recipe(mut self, recipe: Self) -> Self {
        self.recipe_list.push(recipe);
        self
    }

    /// Returns the description if present and not blank.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// Returns `true` if this recipe composes other recipes.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        !self.recipe_list.is_empty()
    }
}

/// Metadata describing one recipe option.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OptionDescriptor {
    /// Option name.
    pub name: String,

    /// Type tag as displayed (e.g. `int`, `String`, `List`).
    #[serde(rename = "type")]
    pub type_name: String,

    /// Whether the option must be supplied.
    #[serde(default)]
    pub required: bool,

    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,

    /// Configured value; only set on options of nested recipes.
    #[serde(default)]
    pub value: Option<OptionValue>,
}

impl OptionDescriptor {
    /// Creates an optional, undescribed option with no value.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            required: false,
            description: None,
            value: None,
        }
    }

    /// Marks the option as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Binds a configured value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<OptionValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Returns the description if present and not blank.
    #[must_use]
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }
}

/// A concrete option value bound inside a composite recipe.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean flag.
    Bool(bool),
    /// Whole number.
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// Free text.
    Text(String),
    /// Sequence of values.
    List(Vec<OptionValue>),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

// ============================================================================
// Provider
// ============================================================================

/// Source of recipe descriptors.
pub trait CatalogProvider {
    /// Returns every recipe descriptor in the catalog, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be read or is malformed.
    fn list_recipe_descriptors(&self) -> Result<Vec<RecipeDescriptor>, CatalogError>;
}

/// A catalog backed by an in-memory descriptor list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    recipes: Vec<RecipeDescriptor>,
}

impl StaticCatalog {
    /// Wraps an existing descriptor list.
    #[must_use]
    pub const fn new(recipes: Vec<RecipeDescriptor>) -> Self {
        Self { recipes }
    }
}

impl CatalogProvider for StaticCatalog {
    fn list_recipe_descriptors(&self) -> Result<Vec<RecipeDescriptor>, CatalogError> {
        Ok(self.recipes.clone())
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        /// Catalog path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported catalog format: {} (expected .yaml, .yml or .json)", path.display())]
    UnsupportedFormat {
        /// Catalog path.
        path: PathBuf,
    },

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required text field is empty.
    #[error("recipe '{recipe}' has an empty {field}")]
    MissingField {
        /// Field name as written in the catalog.
        field: &'static str,
        /// Recipe name (may be empty when the name itself is missing).
        recipe: String,
    },

    /// Two catalog entries share a name.
    #[error("duplicate recipe name: {name}")]
    DuplicateRecipe {
        /// The repeated name.
        name: String,
    },

    /// A recipe list entry names a recipe the catalog does not define.
    #[error("recipe {parent} references unknown recipe {name}{}", did_you_mean(.suggestion.as_deref()))]
    UnknownReference {
        /// The composite recipe.
        parent: String,
        /// The unresolved reference.
        name: String,
        /// Closest catalog name, if any is near.
        suggestion: Option<String>,
    },
}

fn did_you_mean(suggestion: Option<&str>) -> String {
    suggestion.map_or_else(String::new, |s| format!(" (did you mean '{s}'?)"))
}
