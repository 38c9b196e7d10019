//! Output file writing.
//!
//! One file at a time: parent directories are created first (an existing
//! directory is not an error), then the file is opened per the configured
//! [`ExistingFiles`] policy, written and closed.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use crate::config::ExistingFiles;
use crate::docgen::error::DocsError;

/// Writes generated documents below a destination directory.
#[derive(Debug)]
pub struct DocWriter {
    root: PathBuf,
    policy: ExistingFiles,
    written: usize,
}

impl DocWriter {
    /// Creates a writer rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, policy: ExistingFiles) -> Self {
        Self {
            root: root.into(),
            policy,
            written: 0,
        }
    }

    /// Number of files written so far.
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Writes `content` to `relative` (a `/`-separated path under the root).
    ///
    /// Returns the full path written.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::Io` if a directory or the file cannot be created
    /// or written, and `DocsError::AlreadyExists` if the file exists under
    /// the [`ExistingFiles::Fail`] policy.
    pub fn write(&mut self, relative: &str, content: &str) -> Result<PathBuf, DocsError> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| DocsError::io(parent, e))?;
        }

        let mut options = OpenOptions::new();
        options.write(true);
        match self.policy {
            ExistingFiles::Overwrite => options.create(true).truncate(true),
            ExistingFiles::Fail => options.create_new(true),
        };

        let mut file = options.open(&path).map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                DocsError::AlreadyExists { path: path.clone() }
            } else {
                DocsError::io(&path, e)
            }
        })?;
        file.write_all(content.as_bytes())
            .map_err(|e| DocsError::io(&path, e))?;

        self.written += 1;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote document");
        Ok(path)
    }
}
