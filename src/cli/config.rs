//! Config commands.
//!
//! Implements get, set, rm, ls and path against `osv.kvc`.

use serde::Serialize;
use tracing::{info, warn};

use crate::cli::output;
use crate::core::config;
use crate::core::document::survives_round_trip;
use crate::error::{ConfigError, Result};

/// One entry of `config ls --json`.
#[derive(Serialize)]
struct Entry<'a> {
    key: &'a str,
    value: &'a str,
}

fn require_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ConfigError::EmptyKey.into());
    }
    Ok(())
}

/// Get a config value.
pub fn get(key: &str) -> Result<()> {
    require_key(key)?;
    let doc = config::open()?;
    let value = doc
        .get(key)
        .ok_or_else(|| ConfigError::NotSet(key.to_string()))?;
    // Plain output for scripting - no decoration
    println!("{}", value);
    Ok(())
}

/// Set a config value.
pub fn set(key: &str, value: &str) -> Result<()> {
    require_key(key)?;
    info!("Setting config: {}", key);
    if !survives_round_trip(value) {
        warn!(key = %key, "value will not read back unchanged from the config file");
    }
    let mut doc = config::open()?;
    doc.set(key, value);
    doc.save()?;
    output::success(&format!("config '{}' updated", output::key(key)));
    Ok(())
}

/// Remove a config value. Absent keys are not an error.
pub fn rm(key: &str) -> Result<()> {
    require_key(key)?;
    info!("Removing config: {}", key);
    let mut doc = config::open()?;
    doc.remove(key);
    doc.save()?;
    output::success(&format!("config '{}' removed", output::key(key)));
    Ok(())
}

/// List config values in file order.
pub fn list(json: bool) -> Result<()> {
    let doc = config::load()?;

    if json {
        let entries: Vec<Entry> = doc.iter().map(|(key, value)| Entry { key, value }).collect();
        let result = serde_json::json!({
            "count": entries.len(),
            "values": entries,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if doc.keys().next().is_none() {
        output::dimmed("no config values set");
    } else {
        for (key, value) in doc.iter() {
            output::kv(key, value.replace('\n', "\\n"));
        }
    }

    Ok(())
}

/// Print the config file path.
pub fn path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}
