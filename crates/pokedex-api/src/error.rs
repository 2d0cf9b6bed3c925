//! Internal error types for PokeAPI operations.
//!
//! These errors are internal to `pokedex-api` and are mapped to core port
//! errors at the boundary.

use thiserror::Error;

/// Result type alias for PokeAPI operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to PokeAPI operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// API request failed with an HTTP error status.
    #[error("PokeAPI request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The configured base URL cannot have path segments appended.
    #[error("Base URL cannot be extended with an id: {url}")]
    InvalidBaseUrl {
        /// The offending base URL
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
