//! Error types for osv.
//!
//! Parsing and in-memory mutation never fail; everything here comes from
//! the filesystem, the configuration layer, or a secret store backend.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from reading or writing a `.kvc` document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from locating or preparing the osv configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to determine the user configuration directory")]
    NoConfigDir,

    #[error("key must not be empty")]
    EmptyKey,

    #[error("{0} not set")]
    NotSet(String),

    #[error("failed to create config directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create config file {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from a secret store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("invalid secret key: {0:?}")]
    InvalidKey(String),

    #[error("secret not found: {0}")]
    NotFound(String),

    #[error("removed {removed} of {total} secrets")]
    PartialRemove { removed: usize, total: usize },

    #[error("invalid filter pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),
}

pub type Result<T> = std::result::Result<T, Error>;
