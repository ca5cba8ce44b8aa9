//! osv - Operating System Vaults CLI.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use osv::cli::output;
use osv::cli::{execute, Cli};
use osv::core::constants;
use osv::error::{ConfigError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("osv=debug")
        } else {
            EnvFilter::new("osv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::Config(ConfigError::NotSet(_)) => Some("run: osv config set <key> <value>"),
            Error::Config(ConfigError::NoConfigDir) => {
                Some("set OSV_CONFIG_DIR to choose where osv.kvc lives")
            }
            Error::Store(StoreError::NotFound(_)) => Some("run: osv ls to see stored keys"),
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
