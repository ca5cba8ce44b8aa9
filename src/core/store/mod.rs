//! Secret storage.
//!
//! The OS credential store is reached through the [`SecretStore`] trait,
//! a plain `get/set/remove/list` capability over string values.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `keyring.rs`)
//! 3. Re-export from this module and wire it into [`open_store`]

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::core::config::{self, KeyringSettings};
use crate::core::constants;
use crate::error::{ConfigError, Result, StoreError};

mod document;
mod memory;

pub use document::DocumentStore;
pub use memory::MemoryStore;

/// Key-value secret storage.
pub trait SecretStore {
    /// Fetch the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidKey` for keys failing [`validate_key`].
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidKey` or a backend error.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if nothing is stored under `key`.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// All stored keys.
    fn list(&self) -> Result<Vec<String>>;
}

/// Which backend [`open_store`] builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    /// Process-local, nothing persisted.
    Memory,
    /// A `.kvc` document on disk.
    Document(PathBuf),
}

impl StoreKind {
    /// Pick the backend for `settings`.
    ///
    /// `OSV_STORE=memory` selects [`StoreKind::Memory`]; otherwise the
    /// service's vault file from [`config::vault_path`] is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the vault path cannot be resolved.
    pub fn for_settings(settings: &KeyringSettings) -> Result<Self> {
        match std::env::var(constants::STORE_ENV) {
            Ok(kind) if kind == constants::MEMORY_STORE => Ok(StoreKind::Memory),
            _ => Ok(StoreKind::Document(config::vault_path(&settings.service)?)),
        }
    }
}

/// Open a secret store backend.
///
/// # Errors
///
/// Returns an error if a document-backed store cannot be read.
pub fn open_store(kind: StoreKind) -> Result<Box<dyn SecretStore>> {
    match kind {
        StoreKind::Memory => {
            info!("Using in-memory secret store");
            Ok(Box::new(MemoryStore::default()))
        }
        StoreKind::Document(path) => {
            info!(path = %path.display(), "Using document secret store");
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            Ok(Box::new(DocumentStore::open(path)?))
        }
    }
}

/// Check that `key` is usable as a secret key.
///
/// Keys are 1 to 128 characters of ASCII alphanumerics and `- _ . :`.
///
/// # Errors
///
/// Returns `StoreError::InvalidKey` otherwise.
pub fn validate_key(key: &str) -> Result<()> {
    let ok = !key.is_empty()
        && key.len() <= constants::MAX_KEY_LEN
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || constants::ALLOWED_KEY_SYMBOLS.contains(&c));

    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()).into())
    }
}

/// Move the value under `old` to `new`.
///
/// Copies first and deletes second, so a failed delete leaves both keys.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if `old` holds nothing.
pub fn rename(store: &mut dyn SecretStore, old: &str, new: &str) -> Result<()> {
    let value = store
        .get(old)?
        .ok_or_else(|| StoreError::NotFound(old.to_string()))?;

    store.set(new, &value)?;
    store.remove(old)?;

    info!(from = %old, to = %new, "renamed secret");
    Ok(())
}
