//! Persistence for documents.
//!
//! Thin file I/O around parse and serialize, bound to a remembered path.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Document;
use crate::error::{DocumentError, Result};

impl Document {
    /// Read a document from disk and remember `path` for [`Document::save`].
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Read` if the file is missing, unreadable,
    /// or not valid UTF-8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut doc = Self::new();
        doc.load_into(path)?;
        Ok(doc)
    }

    /// Read `path` and append its elements to this document.
    ///
    /// The remembered path is set before reading, so it changes even if
    /// the read fails.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Read` if the file cannot be read.
    pub fn load_into(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading document");

        self.path = Some(path.to_path_buf());
        let contents = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&contents);

        debug!(elements = self.len(), keys = self.index.len(), "document loaded");
        Ok(())
    }

    /// Write the document back to its remembered path.
    ///
    /// Succeeds without writing anything when no path is remembered.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Write` if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        match &self.path {
            Some(path) => write(path, &self.to_string()),
            None => {
                debug!("no path remembered, skipping save");
                Ok(())
            }
        }
    }

    /// Write the document to `path`, leaving the remembered path alone.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Write` if the file cannot be written.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write(path.as_ref(), &self.to_string())
    }

    /// The remembered path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }
}

fn write(path: &Path, contents: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = contents.len(), "saving document");
    fs::write(path, contents).map_err(|source| {
        DocumentError::Write {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}
