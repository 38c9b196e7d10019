//! Error types for `recipedoc`
//!
//! Domain errors live next to their modules ([`DocsError`], [`CatalogError`]);
//! this module adds configuration errors, the top-level error and its
//! exit-code mapping.

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::docgen::DocsError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `recipedoc` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// Configuration or catalog error (invalid YAML, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied, file exists)
    pub const IO_ERROR: i32 = 3;

    /// Recipe name outside the root namespace, or unusable document path
    pub const NAMESPACE_ERROR: i32 = 4;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `recipedoc` operations.
#[derive(Debug, Error)]
pub enum RecipeDocError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Catalog loading error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Documentation generation error
    #[error(transparent)]
    Docs(#[from] DocsError),
}

impl RecipeDocError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(ConfigError::Read { .. }) => ExitCode::IO_ERROR,
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Catalog(e) | Self::Docs(DocsError::Catalog(e)) => catalog_exit_code(e),
            Self::Docs(DocsError::Io { .. } | DocsError::AlreadyExists { .. }) => {
                ExitCode::IO_ERROR
            }
            Self::Docs(DocsError::UnrecognizedNamespace { .. } | DocsError::InvalidPath { .. }) => {
                ExitCode::NAMESPACE_ERROR
            }
        }
    }
}

const fn catalog_exit_code(error: &CatalogError) -> i32 {
    match error {
        CatalogError::Read { .. } => ExitCode::IO_ERROR,
        _ => ExitCode::CONFIG_ERROR,
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing failed
    #[error("parse error in {}: {message}", path.display())]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}
