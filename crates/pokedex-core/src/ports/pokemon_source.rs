//! Pokemon data source trait definition.
//!
//! This port defines the single read operation the lookup tool needs.
//! Implementations live in `pokedex-api` (remote) and `pokedex-db` (local).

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::PokedexEntry;

/// Errors from data source operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON, SQL) are mapped to these.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No record exists for the requested id.
    #[error("Pokémon #{id} not found")]
    NotFound {
        /// The id that was looked up
        id: i64,
    },

    /// Network or connectivity error, including unexpected HTTP statuses.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The remote service answered with a body we could not use.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Storage backend error (open or query failure).
    #[error("Database error: {message}")]
    Storage {
        /// Description of the storage failure
        message: String,
    },

    /// The source was configured with unusable settings.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Port trait for looking up a single record by id.
///
/// # Design
///
/// - Returns `SourceError::NotFound` rather than an `Option` so that every
///   caller reports a missing record the same way
/// - Exactly one request or query per call; no retries
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// Fetch the record with the given id.
    async fn fetch(&self, id: i64) -> Result<PokedexEntry, SourceError>;
}
