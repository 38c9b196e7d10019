//! Configuration schema for the documentation generator.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::docgen::path::{NAMESPACE_SEPARATOR, check_override_path, check_relative_path};
use crate::error::ConfigError;

/// Default root namespace stripped from recipe names.
pub const DEFAULT_ROOT_PREFIX: &str = "org.openrewrite";

/// Default directory, relative to the destination, holding recipe pages.
pub const DEFAULT_RECIPES_DIR: &str = "reference/recipes";

/// Default summary snippet file name, relative to the destination.
pub const DEFAULT_SUMMARY_FILE: &str = "SUMMARY_snippet.md";

/// What to do when a generated file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExistingFiles {
    /// Truncate and rewrite the file.
    #[default]
    Overwrite,
    /// Abort the run with an error.
    Fail,
}

/// Settings for one documentation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Namespace every recipe name must start with (e.g. `org.openrewrite`).
    pub root_prefix: String,

    /// Directory for recipe pages and category indexes, `/`-separated and
    /// relative to the destination.
    pub recipes_dir: String,

    /// Summary snippet path, relative to the destination.
    pub summary_file: String,

    /// Policy for files that already exist.
    pub existing_files: ExistingFiles,

    /// Whether to write the recipes-by-tag page.
    pub tag_index: bool,

    /// Full recipe name → replacement document path (no `.md` suffix).
    pub path_overrides: BTreeMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root_prefix: DEFAULT_ROOT_PREFIX.to_string(),
            recipes_dir: DEFAULT_RECIPES_DIR.to_string(),
            summary_file: DEFAULT_SUMMARY_FILE.to_string(),
            existing_files: ExistingFiles::default(),
            tag_index: true,
            path_overrides: BTreeMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Checks that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.root_prefix;
        if prefix.is_empty()
            || prefix.starts_with(NAMESPACE_SEPARATOR)
            || prefix.ends_with(NAMESPACE_SEPARATOR)
            || prefix.split(NAMESPACE_SEPARATOR).any(str::is_empty)
        {
            return Err(invalid(
                "root_prefix",
                prefix,
                "a non-empty dotted namespace such as 'org.openrewrite'",
            ));
        }

        check_output_path("recipes_dir", &self.recipes_dir)?;
        check_output_path("summary_file", &self.summary_file)?;

        for (name, path) in &self.path_overrides {
            if let Err(reason) = check_override_path(path) {
                return Err(invalid(
                    &format!("path_overrides.{name}"),
                    path,
                    &format!("a lower-case relative document path ({reason})"),
                ));
            }
        }

        Ok(())
    }

    /// Location of the recipes-by-tag page, a sibling of the recipes
    /// directory (`reference/recipes` → `reference/recipes-by-tag.md`).
    #[must_use]
    pub fn tag_index_file(&self) -> String {
        let dir = self.recipes_dir.trim_end_matches('/');
        format!("{dir}-by-tag.md")
    }
}

fn check_output_path(field: &str, value: &str) -> Result<(), ConfigError> {
    if Path::new(value).is_absolute() {
        return Err(invalid(field, value, "a path relative to the destination"));
    }
    check_relative_path(value)
        .map_err(|reason| invalid(field, value, &format!("a relative path ({reason})")))
}

fn invalid(field: &str, value: &str, expected: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GeneratorConfig::default();
        assert_eq!(config.root_prefix, "org.openrewrite");
        assert_eq!(config.recipes_dir, "reference/recipes");
        assert_eq!(config.summary_file, "SUMMARY_snippet.md");
        assert_eq!(config.existing_files, ExistingFiles::Overwrite);
        assert!(config.tag_index);
        config.validate().unwrap();
    }

    #[test]
    fn rejects_bad_prefix() {
        for prefix in ["", ".org", "org.", "org..openrewrite"] {
            let config = GeneratorConfig {
                root_prefix: prefix.to_string(),
                ..GeneratorConfig::default()
            };
            let err = config.validate().unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "root_prefix"),
                "prefix {prefix:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_absolute_recipes_dir() {
        let config = GeneratorConfig {
            recipes_dir: "/reference/recipes".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_parent_traversal_in_summary_file() {
        let config = GeneratorConfig {
            summary_file: "../SUMMARY.md".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_override() {
        let mut config = GeneratorConfig::default();
        config
            .path_overrides
            .insert("org.openrewrite.java.Foo".to_string(), "java//foo".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("path_overrides.org.openrewrite.java.Foo"));
    }

    #[test]
    fn rejects_upper_case_override() {
        let mut config = GeneratorConfig::default();
        config.path_overrides.insert(
            "org.openrewrite.java.cleanup.Bar".to_string(),
            "java/cleanup/Bar".to_string(),
        );
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("upper-case"), "got {err}");
    }

    #[test]
    fn rejects_override_shadowing_category_index() {
        for path in ["readme", "java/readme"] {
            let mut config = GeneratorConfig::default();
            config
                .path_overrides
                .insert("org.openrewrite.java.Foo".to_string(), path.to_string());
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("category index"), "{path}: {err}");
        }
    }

    #[test]
    fn accepts_lower_case_override() {
        let mut config = GeneratorConfig::default();
        config.path_overrides.insert(
            "org.openrewrite.java.cleanup.Bar".to_string(),
            "java/cleanup/bar-limits".to_string(),
        );
        config.validate().unwrap();
    }

    #[test]
    fn tag_index_is_sibling_of_recipes_dir() {
        let config = GeneratorConfig::default();
        assert_eq!(config.tag_index_file(), "reference/recipes-by-tag.md");

        let config = GeneratorConfig {
            recipes_dir: "docs/".to_string(),
            ..GeneratorConfig::default()
        };
        assert_eq!(config.tag_index_file(), "docs-by-tag.md");
    }
}
