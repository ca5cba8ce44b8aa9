//! Constants used throughout osv.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (osv.kvc).
pub const CONFIG_FILE: &str = "osv.kvc";

/// Directory under the user config dir holding the config file.
pub const CONFIG_DIR_NAME: &str = "osv";

/// Environment variable overriding the directory of the config file.
pub const CONFIG_DIR_ENV: &str = "OSV_CONFIG_DIR";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "OSV_LOG";

/// Config key for the default keyring service name.
pub const SERVICE_KEY: &str = "service";

/// Config key for the Secret Service (libsecret) collection name.
pub const LIBSECRET_COLLECTION_KEY: &str = "libsecret.collection";

/// Config key for the macOS keychain name.
pub const KEYCHAIN_NAME_KEY: &str = "keychain.name";

/// Default collection and keychain name.
pub const DEFAULT_KEYRING_NAME: &str = "login";

/// Punctuation allowed in secret keys besides ASCII alphanumerics.
pub const ALLOWED_KEY_SYMBOLS: &[char] = &['-', '_', '.', ':'];

/// Longest accepted secret key.
pub const MAX_KEY_LEN: usize = 128;

/// Environment variable supplying the default service name.
pub const SERVICE_ENV: &str = "OSV_SERVICE";

/// Environment variable selecting the secret store backend.
pub const STORE_ENV: &str = "OSV_STORE";

/// `OSV_STORE` value for the in-memory backend.
pub const MEMORY_STORE: &str = "memory";

/// Directory next to the config file holding one `.kvc` file per service.
pub const VAULT_DIR_NAME: &str = "vaults";

/// Vault file stem used when no service is configured.
pub const DEFAULT_SERVICE: &str = "default";
