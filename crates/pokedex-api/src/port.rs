//! Port trait implementation for `ApiClient`.
//!
//! This module implements the core-owned `PokemonSource` trait for
//! `ApiClient`, handling the conversion between internal API types and
//! core domain types.

use async_trait::async_trait;
use pokedex_core::{PokedexEntry, Pokemon, PokemonSource, SourceError};

use crate::client::{ApiClient, DefaultApiClient};
use crate::config::ApiClientConfig;
use crate::error::ApiError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `SourceError` for a lookup of `id`.
fn map_error(err: ApiError, id: i64) -> SourceError {
    match err {
        ApiError::ApiRequestFailed { status: 404, .. } => SourceError::NotFound { id },
        ApiError::ApiRequestFailed { status, url } => SourceError::Network {
            message: format!("request failed with status {status}: {url}"),
        },
        ApiError::Network(e) => SourceError::Network {
            message: e.to_string(),
        },
        ApiError::JsonParse(e) => SourceError::InvalidResponse {
            message: e.to_string(),
        },
        e @ (ApiError::InvalidUrl(_) | ApiError::InvalidBaseUrl { .. }) => {
            SourceError::Configuration {
                message: e.to_string(),
            }
        }
    }
}

impl DefaultApiClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Configuration` if the base URL is invalid or the
    /// HTTP client cannot be initialised.
    pub fn new(config: &ApiClientConfig) -> Result<Self, SourceError> {
        Self::try_new(config).map_err(|e| SourceError::Configuration {
            message: e.to_string(),
        })
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> PokemonSource for ApiClient<B> {
    async fn fetch(&self, id: i64) -> Result<PokedexEntry, SourceError> {
        let api = self.get_pokemon(id).await.map_err(|e| map_error(e, id))?;
        // The remote API has no description field
        Ok(PokedexEntry::Basic(Pokemon::from(api)))
    }
}
