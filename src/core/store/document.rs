//! Document-backed secret store.
//!
//! Keeps secrets in a `.kvc` file and saves after every mutation. Values
//! are stored in plain text, so this backend suits tests and throwaway
//! environments rather than real credentials.

use std::path::PathBuf;

use tracing::debug;

use super::{validate_key, SecretStore};
use crate::core::config;
use crate::core::document::Document;
use crate::error::{Result, StoreError};

/// Secret store persisted to a `.kvc` document.
#[derive(Debug)]
pub struct DocumentStore {
    doc: Document,
}

impl DocumentStore {
    /// Open (or start) the store at `path`. A missing file is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let doc = config::load_from(path.into())?;
        debug!(secrets = doc.keys().count(), "document store opened");
        Ok(Self { doc })
    }

    /// The backing document.
    pub fn document(&self) -> &Document {
        &self.doc
    }
}

impl SecretStore for DocumentStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.doc.get(key).map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.doc.set(key, value);
        self.doc.save()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        if !self.doc.contains_key(key) {
            return Err(StoreError::NotFound(key.to_string()).into());
        }
        self.doc.remove(key);
        self.doc.save()
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.doc.keys().map(str::to_string).collect())
    }
}
