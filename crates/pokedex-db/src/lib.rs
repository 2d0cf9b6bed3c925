#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::SourceFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

// Re-export repository implementations
pub use repositories::SqlitePokemonRepository;

// Re-export setup functions for convenient access
pub use setup::{create_database, open_database};

// Bundled SQLite build for sqlx
use libsqlite3_sys as _;
