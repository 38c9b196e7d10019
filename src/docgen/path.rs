//! Category path resolution.
//!
//! A recipe name such as `org.openrewrite.java.cleanup.Bar` is split on
//! the namespace separator, the configured root prefix is checked token by
//! token and dropped, and the remaining tokens are lower-cased and joined
//! with `/`: `java/cleanup/bar`. Everything before the last `/` is the
//! category, the rest is the leaf file stem.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::GeneratorConfig;
use crate::docgen::error::DocsError;

/// Separator between namespace tokens in recipe names.
pub const NAMESPACE_SEPARATOR: char = '.';

/// Separator between segments of a derived document path.
pub const PATH_SEPARATOR: char = '/';

/// Markdown file extension for generated documents.
pub const DOCUMENT_EXTENSION: &str = ".md";

/// Relative location of a recipe document, without extension.
///
/// Never empty, never starts or ends with [`PATH_SEPARATOR`], and has no
/// empty segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipePath(String);

impl RecipePath {
    /// The full relative path (`java/cleanup/bar`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Category portion (`java/cleanup`); empty for recipes at the root.
    #[must_use]
    pub fn category(&self) -> &str {
        self.0.rfind(PATH_SEPARATOR).map_or("", |i| &self.0[..i])
    }

    /// Leaf file stem (`bar`).
    #[must_use]
    pub fn leaf(&self) -> &str {
        self.0.rfind(PATH_SEPARATOR).map_or(self.0.as_str(), |i| &self.0[i + 1..])
    }

    /// Number of separators in the path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.matches(PATH_SEPARATOR).count()
    }

    /// Leaf file name (`bar.md`).
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}{DOCUMENT_EXTENSION}", self.leaf())
    }

    /// Document path relative to the recipes directory (`java/cleanup/bar.md`).
    #[must_use]
    pub fn document(&self) -> String {
        format!("{}{DOCUMENT_EXTENSION}", self.0)
    }

    /// Relative link to this document from the document at `from`.
    ///
    /// `from` sits `from.depth()` directories below the recipes directory,
    /// so that many `../` segments climb back to it before descending.
    #[must_use]
    pub fn link_from(&self, from: &Self) -> String {
        let mut link = "../".repeat(from.depth());
        link.push_str(&self.document());
        link
    }
}

impl fmt::Display for RecipePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives document paths from recipe names.
#[derive(Debug, Clone)]
pub struct PathResolver {
    prefix_tokens: Vec<String>,
    root_prefix: String,
    overrides: BTreeMap<String, String>,
}

impl PathResolver {
    /// Creates a resolver for names under `root_prefix`.
    #[must_use]
    pub fn new(root_prefix: &str) -> Self {
        Self {
            prefix_tokens: root_prefix
                .split(NAMESPACE_SEPARATOR)
                .map(str::to_string)
                .collect(),
            root_prefix: root_prefix.to_string(),
            overrides: BTreeMap::new(),
        }
    }

    /// Creates a resolver from the generator configuration.
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(&config.root_prefix).with_overrides(config.path_overrides.clone())
    }

    /// Replaces the per-recipe path overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: BTreeMap<String, String>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolves a recipe name to its document path.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::UnrecognizedNamespace` if the name does not start
    /// with the root prefix, and `DocsError::InvalidPath` if nothing or an
    /// empty token follows it.
    pub fn resolve(&self, name: &str) -> Result<RecipePath, DocsError> {
        if let Some(path) = self.overrides.get(name) {
            check_override_path(path).map_err(|reason| DocsError::InvalidPath {
                name: name.to_string(),
                path: path.clone(),
                reason,
            })?;
            return Ok(RecipePath(path.clone()));
        }

        let mut tokens = name.split(NAMESPACE_SEPARATOR);
        for expected in &self.prefix_tokens {
            if tokens.next() != Some(expected.as_str()) {
                return Err(DocsError::UnrecognizedNamespace {
                    name: name.to_string(),
                    prefix: self.root_prefix.clone(),
                });
            }
        }

        let remaining: Vec<&str> = tokens.collect();
        if remaining.is_empty() {
            return Err(DocsError::InvalidPath {
                name: name.to_string(),
                path: String::new(),
                reason: "nothing follows the root prefix",
            });
        }
        if remaining.iter().any(|t| t.is_empty()) {
            return Err(DocsError::InvalidPath {
                name: name.to_string(),
                path: remaining.join("/"),
                reason: "empty namespace segment",
            });
        }

        let path = remaining.join("/").to_lowercase();
        check_relative_path(&path).map_err(|reason| DocsError::InvalidPath {
            name: name.to_string(),
            path: path.clone(),
            reason,
        })?;
        Ok(RecipePath(path))
    }
}

/// Checks that `path` is a clean, relative, `/`-separated path.
///
/// # Errors
///
/// Returns a short description of the first problem found.
pub fn check_relative_path(path: &str) -> Result<(), &'static str> {
    if path.is_empty() {
        return Err("path is empty");
    }
    if path.contains('\\') {
        return Err("backslash in path");
    }
    if path.starts_with(PATH_SEPARATOR) || path.ends_with(PATH_SEPARATOR) {
        return Err("leading or trailing separator");
    }
    for segment in path.split(PATH_SEPARATOR) {
        match segment {
            "" => return Err("empty segment"),
            "." | ".." => return Err("relative segment"),
            _ => {}
        }
    }
    Ok(())
}

/// Checks a configured path override.
///
/// On top of [`check_relative_path`], overrides must already be lower-case
/// like derived paths, and their leaf must not collide with a category index.
///
/// # Errors
///
/// Returns a short description of the first problem found.
pub fn check_override_path(path: &str) -> Result<(), &'static str> {
    check_relative_path(path)?;
    if path != path.to_lowercase() {
        return Err("upper-case characters in path");
    }
    let leaf = path.rfind(PATH_SEPARATOR).map_or(path, |i| &path[i + 1..]);
    if leaf == INDEX_STEM {
        return Err("leaf collides with the category index");
    }
    Ok(())
}

/// File stem of category index pages, reserved for them.
const INDEX_STEM: &str = "readme";
