//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - One lookup per call, no batching

pub mod pokemon_source;

use thiserror::Error;

pub use pokemon_source::{PokemonSource, SourceError};

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data source operation failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}
