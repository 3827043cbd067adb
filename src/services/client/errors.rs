use thiserror::Error;

/// Errors raised by Shopify Admin API calls and public-URL downloads.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("request to {endpoint} failed: {status}")]
    ApiStatus {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },

    #[error("downloading {key} failed: {status}")]
    Download {
        key: String,
        status: reqwest::StatusCode,
    },

    #[error("uploading {key} failed: {status} - {body}")]
    Upload {
        key: String,
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
