//! Catalog client errors.

use std::sync::Arc;

use aurum::fixtures::FixtureError;
use thiserror::Error;

/// Errors that can occur when fetching catalog resources.
#[derive(Debug, Error)]
pub enum ClientError {
    /// An HTTP transport or body decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog API returned a non-2xx response.
    #[error("unexpected response from catalog API for {path}: status {status}: {body}")]
    UnexpectedStatus {
        /// Requested path
        path: String,

        /// HTTP status code
        status: u16,

        /// Response body, possibly empty
        body: String,
    },

    /// The configured API URL cannot be used.
    #[error("invalid catalog API URL `{0}`")]
    InvalidUrl(String),

    /// A catalog snapshot could not be loaded.
    #[error("failed to load catalog snapshot")]
    Snapshot(#[source] FixtureError),

    /// A failed request that several concurrent callers were waiting on.
    #[error(transparent)]
    Shared(Arc<ClientError>),
}

impl ClientError {
    /// The HTTP status the catalog API answered with, if the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(error) => error.status().map(|status| status.as_u16()),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Shared(error) => error.status(),
            Self::InvalidUrl(_) | Self::Snapshot(_) => None,
        }
    }

    /// Take back a loader error from the cache, sharing it only if other callers still hold it.
    pub(crate) fn unshare(error: Arc<Self>) -> Self {
        Arc::try_unwrap(error).unwrap_or_else(Self::Shared)
    }
}

impl From<FixtureError> for ClientError {
    fn from(error: FixtureError) -> Self {
        Self::Snapshot(error)
    }
}
