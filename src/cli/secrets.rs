//! Secret commands.
//!
//! Implements get, set, rm, ls and rename against the store picked for
//! the active service.

use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use crate::cli::output;
use crate::core::config::{self, KeyringSettings};
use crate::core::document::survives_round_trip;
use crate::core::store::{self, SecretStore, StoreKind};
use crate::error::{DocumentError, Result, StoreError};

/// Where `set` takes the secret value from.
pub enum ValueSource<'a> {
    Arg(&'a str),
    File(&'a Path),
    Stdin,
}

impl ValueSource<'_> {
    fn read(self) -> Result<String> {
        match self {
            ValueSource::Arg(value) => Ok(value.to_string()),
            ValueSource::File(path) => {
                std::fs::read_to_string(path).map_err(|source| {
                    DocumentError::Read {
                        path: path.to_path_buf(),
                        source,
                    }
                    .into()
                })
            }
            ValueSource::Stdin => {
                let mut value = String::new();
                std::io::stdin().read_to_string(&mut value)?;
                Ok(value)
            }
        }
    }
}

/// Open the store for `service`, falling back to the configured one.
fn open(service: Option<&str>) -> Result<Box<dyn SecretStore>> {
    let settings = KeyringSettings::from_document(&config::load()?, service);
    info!(
        service = %settings.service,
        collection = %settings.libsecret_collection,
        keychain = %settings.keychain_name,
        "opening secret store"
    );
    store::open_store(StoreKind::for_settings(&settings)?)
}

/// Get one or more secret values.
pub fn get(keys: &[String], json: bool, service: Option<&str>) -> Result<()> {
    let vault = open(service)?;

    let mut values = Vec::with_capacity(keys.len());
    for key in keys {
        let value = vault
            .get(key)?
            .ok_or_else(|| StoreError::NotFound(key.clone()))?;
        values.push((key.as_str(), value));
    }

    if json {
        let map: serde_json::Map<String, serde_json::Value> = values
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.into()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        // Plain output for scripting - no decoration
        for (_, value) in values {
            println!("{}", value);
        }
    }

    Ok(())
}

/// Set a secret value.
pub fn set(key: &str, source: ValueSource<'_>, service: Option<&str>) -> Result<()> {
    info!("Setting secret: {}", key);
    let value = source.read()?;
    if !survives_round_trip(&value) {
        warn!(key = %key, "value will not read back unchanged from a file vault");
    }

    let mut vault = open(service)?;
    vault.set(key, &value)?;
    output::success(&format!("{} is set", output::key(key)));
    Ok(())
}

/// Remove secrets, carrying on past keys that fail.
pub fn rm(keys: &[String], service: Option<&str>) -> Result<()> {
    let mut vault = open(service)?;

    let mut removed = 0;
    for key in keys {
        info!("Removing secret: {}", key);
        match vault.remove(key) {
            Ok(()) => {
                removed += 1;
                output::success(&format!("removed: {}", output::key(key)));
            }
            Err(e) => output::error(&format!("{}: {}", key, e)),
        }
    }

    if removed == keys.len() {
        Ok(())
    } else {
        Err(StoreError::PartialRemove {
            removed,
            total: keys.len(),
        }
        .into())
    }
}

/// List secret keys, optionally filtered by a glob pattern.
pub fn list(filter: Option<&str>, json: bool, service: Option<&str>) -> Result<()> {
    let pattern = filter
        .map(glob::Pattern::new)
        .transpose()
        .map_err(StoreError::from)?;

    let vault = open(service)?;
    let keys: Vec<String> = vault
        .list()?
        .into_iter()
        .filter(|key| pattern.as_ref().map_or(true, |p| p.matches(key)))
        .collect();

    if json {
        let result = serde_json::json!({
            "count": keys.len(),
            "keys": keys,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if keys.is_empty() {
        output::dimmed("no secrets stored");
    } else {
        for key in keys {
            println!("{}", key);
        }
    }

    Ok(())
}

/// Rename a secret.
pub fn rename(old: &str, new: &str, service: Option<&str>) -> Result<()> {
    store::validate_key(new)?;
    let mut vault = open(service)?;
    store::rename(vault.as_mut(), old, new)?;
    output::success(&format!(
        "renamed {} to {}",
        output::key(old),
        output::key(new)
    ));
    Ok(())
}
