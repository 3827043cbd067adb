use thiserror::Error;

use crate::services::client::errors::ClientError;

/// Run-level errors. Configuration and resolution failures abort the run;
/// per-asset transfer failures are collected into the run summary instead.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("configuration error: {field} is not set")]
    Configuration { field: String },

    #[error("no theme matching {selector} found on {store}")]
    ThemeNotFound { selector: String, store: String },

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("asset {key} has no public URL")]
    MissingPublicUrl { key: String },

    #[error("staging {key} failed: {source}")]
    Staging {
        key: String,
        #[source]
        source: std::io::Error,
    },
}
