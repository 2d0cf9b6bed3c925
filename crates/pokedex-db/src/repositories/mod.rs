//! Data source implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The connection is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_pokemon_repository;

pub use sqlite_pokemon_repository::SqlitePokemonRepository;
