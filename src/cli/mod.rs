//! Command-line interface.

pub mod config;
pub mod output;
pub mod secrets;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::cli::secrets::ValueSource;
use crate::error::Result;

/// osv - Operating System Vaults CLI.
#[derive(Parser)]
#[command(
    name = "osv",
    about = "Interact with your operating system's native keychain and credential vaults",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Service selection shared by the secret commands.
#[derive(Args)]
pub struct VaultArgs {
    /// Service name secrets are grouped under (defaults to the config's `service`)
    #[arg(short, long, env = "OSV_SERVICE")]
    pub service: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Get one or more secrets
    Get {
        /// Secret keys
        #[arg(required = true)]
        keys: Vec<String>,

        /// Output as a JSON object
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        vault: VaultArgs,
    },

    /// Set a secret
    Set {
        /// Secret key
        key: String,

        /// Secret value
        #[arg(
            required_unless_present_any = ["file", "stdin"],
            conflicts_with_all = ["file", "stdin"]
        )]
        value: Option<String>,

        /// Read the value from a file
        #[arg(long, conflicts_with = "stdin")]
        file: Option<PathBuf>,

        /// Read the value from standard input
        #[arg(long)]
        stdin: bool,

        #[command(flatten)]
        vault: VaultArgs,
    },

    /// Remove one or more secrets
    #[command(alias = "remove")]
    Rm {
        /// Secret keys
        #[arg(required = true)]
        keys: Vec<String>,

        #[command(flatten)]
        vault: VaultArgs,
    },

    /// List secret keys
    #[command(alias = "list")]
    Ls {
        /// Glob pattern keys must match (e.g., "app-*")
        filter: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        vault: VaultArgs,
    },

    /// Rename a secret
    Rename {
        /// Current key
        old: String,
        /// New key
        new: String,

        #[command(flatten)]
        vault: VaultArgs,
    },

    /// Manage local osv configuration settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get one config value from the config file
    Get {
        /// Config key (e.g., service)
        key: String,
    },

    /// Set one config value in the config file
    Set {
        /// Config key (e.g., service)
        key: String,
        /// Config value
        value: String,
    },

    /// Remove one config value from the config file
    #[command(alias = "remove")]
    Rm {
        /// Config key
        key: String,
    },

    /// List config values in file order
    #[command(alias = "list")]
    Ls {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the path of the config file
    Path,
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    match command {
        Command::Get { keys, json, vault } => {
            secrets::get(&keys, json, vault.service.as_deref())
        }
        Command::Set {
            key,
            value,
            file,
            stdin: _,
            vault,
        } => {
            // clap requires exactly one of value, --file and --stdin
            let source = match (value.as_deref(), file.as_deref()) {
                (Some(value), _) => ValueSource::Arg(value),
                (None, Some(path)) => ValueSource::File(path),
                (None, None) => ValueSource::Stdin,
            };
            secrets::set(&key, source, vault.service.as_deref())
        }
        Command::Rm { keys, vault } => secrets::rm(&keys, vault.service.as_deref()),
        Command::Ls {
            filter,
            json,
            vault,
        } => secrets::list(filter.as_deref(), json, vault.service.as_deref()),
        Command::Rename { old, new, vault } => {
            secrets::rename(&old, &new, vault.service.as_deref())
        }
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config::get(&key),
            ConfigAction::Set { key, value } => config::set(&key, &value),
            ConfigAction::Rm { key } => config::rm(&key),
            ConfigAction::Ls { json } => config::list(json),
            ConfigAction::Path => config::path(),
        },
    }
}
