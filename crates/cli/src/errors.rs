//! CLI errors.

use std::io;

use aurum_client::ClientError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Fetching from the catalog failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Writing output failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    /// No record has the requested slug.
    #[error("no {kind} with slug `{slug}`")]
    NotFound {
        /// Record kind
        kind: &'static str,

        /// Requested slug
        slug: String,
    },
}
