//! Configuration loading.
//!
//! 1. Start from [`GeneratorConfig::default`]
//! 2. Merge the YAML file, if one was given
//! 3. Apply command-line / environment overrides
//! 4. Validate

use std::path::Path;

use crate::config::schema::{ExistingFiles, GeneratorConfig};
use crate::error::ConfigError;

/// Overrides taken from the command line (or their environment variables).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replacement root namespace.
    pub root_prefix: Option<String>,

    /// Refuse to overwrite existing files.
    pub fail_on_existing: bool,

    /// Skip the recipes-by-tag page.
    pub no_tag_index: bool,
}

impl ConfigOverrides {
    /// Applies the overrides on top of `config`.
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(ref prefix) = self.root_prefix {
            config.root_prefix.clone_from(prefix);
        }
        if self.fail_on_existing {
            config.existing_files = ExistingFiles::Fail;
        }
        if self.no_tag_index {
            config.tag_index = false;
        }
    }
}

/// Loads the effective configuration.
///
/// With no path the defaults are used.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed, or if the
/// merged configuration fails validation.
pub fn load_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<GeneratorConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;
            parse_config(&content, path)?
        }
        None => GeneratorConfig::default(),
    };

    overrides.apply(&mut config);
    config.validate()?;

    tracing::debug!(
        root_prefix = %config.root_prefix,
        recipes_dir = %config.recipes_dir,
        existing_files = ?config.existing_files,
        "configuration loaded"
    );

    Ok(config)
}

/// Parses a YAML configuration document. An empty document yields defaults.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` with the line number when available.
pub fn parse_config(content: &str, path: &Path) -> Result<GeneratorConfig, ConfigError> {
    if content.trim().is_empty() {
        return Ok(GeneratorConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    })
}
