//! Aurum storefront CLI

use std::{io, process::ExitCode};

use aurum_client::{CachedCatalog, HttpCatalog, SnapshotCatalog, Storefront};
use tracing::{debug, error};

use crate::{config::CliConfig, errors::CliError};

mod commands;
mod config;
mod errors;
mod logging;
mod render;

/// Aurum storefront CLI entry point
#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(error) => {
            _ = error.print();

            return ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(1));
        }
    };

    if let Err(error) = logging::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("Logging error: {error}");
        }

        return ExitCode::FAILURE;
    }

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "command failed");

            ExitCode::FAILURE
        }
    }
}

async fn run(config: &CliConfig) -> Result<(), CliError> {
    let mut out = io::stdout();

    if let Some(path) = &config.snapshot {
        let storefront = Storefront::new(SnapshotCatalog::from_path(path)?);

        return commands::run(&config.command, &storefront, &mut out).await;
    }

    debug!(api_url = %config.client.api_url, "using catalog API");

    let http = HttpCatalog::new(&config.client)?;
    let storefront = Storefront::new(CachedCatalog::new(http, &config.client));

    commands::run(&config.command, &storefront, &mut out).await
}
