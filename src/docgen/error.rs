//! Error types for recipe documentation generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while deriving paths or writing the doc tree.
///
/// Every variant is fatal for the run; the generator does not attempt to
/// produce a partial tree.
#[derive(Debug, Error)]
pub enum DocsError {
    /// The recipe name does not start with the configured root namespace.
    #[error("recipe namespace unrecognized: {name} (expected prefix '{prefix}')")]
    UnrecognizedNamespace {
        /// Fully qualified recipe name.
        name: String,
        /// Root prefix the name was checked against.
        prefix: String,
    },

    /// A derived or overridden path is not usable as a document location.
    #[error("invalid document path '{path}' for recipe {name}: {reason}")]
    InvalidPath {
        /// Fully qualified recipe name.
        name: String,
        /// The offending relative path.
        path: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// Directory creation or file write failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The target file exists and the configuration forbids overwriting it.
    #[error("refusing to overwrite existing file {}", path.display())]
    AlreadyExists {
        /// Path of the existing file.
        path: PathBuf,
    },

    /// The catalog provider failed to list recipes.
    #[error(transparent)]
    Catalog(#[from] crate::catalog::CatalogError),
}

impl DocsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
