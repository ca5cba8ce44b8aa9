//! In-memory secret store.

use std::collections::BTreeMap;

use super::{validate_key, SecretStore};
use crate::error::{Result, StoreError};

/// Secret store holding values in a sorted map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: BTreeMap<String, String>,
}

impl SecretStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.map
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(key.to_string()).into())
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.map.keys().cloned().collect())
    }
}
