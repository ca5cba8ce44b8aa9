//! Configuration file management.
//!
//! Locates `osv.kvc`, loads it, and derives the settings the keyring
//! layer needs. The document engine never invents files; the "absent
//! means no configuration yet" policy lives here.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::core::document::Document;
use crate::core::store;
use crate::error::{ConfigError, DocumentError, Error, Result};

/// Path to the configuration file.
///
/// `$OSV_CONFIG_DIR/osv.kvc` when the variable is set and non-empty,
/// otherwise `<user config dir>/osv/osv.kvc`.
///
/// # Errors
///
/// Returns `ConfigError::NoConfigDir` if no user config dir exists.
pub fn config_path() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(constants::CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir).join(constants::CONFIG_FILE));
    }

    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir
        .join(constants::CONFIG_DIR_NAME)
        .join(constants::CONFIG_FILE))
}

/// Load the configuration, treating a missing file as empty.
///
/// The returned document remembers the config path either way.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or an existing file
/// cannot be read.
pub fn load() -> Result<Document> {
    load_from(config_path()?)
}

/// Like [`load`], for an explicit path.
pub fn load_from(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    match Document::load(path) {
        Ok(doc) => Ok(doc),
        Err(Error::Document(DocumentError::Read { source, .. }))
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            debug!(path = %path.display(), "config file missing, using empty config");
            Ok(Document::with_path(path))
        }
        Err(e) => Err(e),
    }
}

/// Create `path` as an empty file, with parent directories, if missing.
///
/// # Errors
///
/// Returns `ConfigError::CreateDir` or `ConfigError::CreateFile` on
/// filesystem failures.
pub fn ensure_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    debug!(path = %path.display(), "creating empty config file");
    fs::write(path, "").map_err(|source| ConfigError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Resolve, pre-create and load the configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or read.
pub fn open() -> Result<Document> {
    open_at(config_path()?)
}

/// Like [`open`], for an explicit path.
pub fn open_at(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    ensure_exists(path)?;
    Document::load(path)
}

/// Path of the document vault for `service`, next to the config file.
///
/// An empty service maps to `vaults/default.kvc`.
///
/// # Errors
///
/// Returns `StoreError::InvalidKey` if `service` is not a valid key, so a
/// service name can never climb out of the vault directory.
pub fn vault_path(service: &str) -> Result<PathBuf> {
    let stem = if service.is_empty() {
        constants::DEFAULT_SERVICE
    } else {
        store::validate_key(service)?;
        service
    };

    let config = config_path()?;
    let dir = config.parent().unwrap_or_else(|| Path::new(""));
    Ok(dir
        .join(constants::VAULT_DIR_NAME)
        .join(format!("{}.kvc", stem)))
}

/// Settings used to open the OS keyring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyringSettings {
    /// Service name secrets are grouped under.
    pub service: String,
    /// Secret Service collection (Linux).
    pub libsecret_collection: String,
    /// Keychain name (macOS).
    pub keychain_name: String,
}

impl KeyringSettings {
    /// Derive settings from a config document.
    ///
    /// A non-empty `service` override wins over the `service` key.
    pub fn from_document(doc: &Document, service: Option<&str>) -> Self {
        let service = service
            .filter(|s| !s.is_empty())
            .or_else(|| doc.get(constants::SERVICE_KEY))
            .unwrap_or_default()
            .to_string();

        let named = |key: &str| {
            doc.get(key)
                .unwrap_or(constants::DEFAULT_KEYRING_NAME)
                .to_string()
        };

        Self {
            service,
            libsecret_collection: named(constants::LIBSECRET_COLLECTION_KEY),
            keychain_name: named(constants::KEYCHAIN_NAME_KEY),
        }
    }
}

impl Default for KeyringSettings {
    fn default() -> Self {
        Self::from_document(&Document::new(), None)
    }
}
