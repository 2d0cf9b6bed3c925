//! `SQLite` implementation of the `PokemonSource` trait.

use std::path::PathBuf;

use async_trait::async_trait;
use sqlx::Connection;
use sqlx::sqlite::SqliteConnection;
use tracing::{debug, warn};

use pokedex_core::{PokedexEntry, PokemonSource, SourceError};

use super::row_mappers::{POKEMON_ID_FILTER, POKEMON_SELECT_COLUMNS, row_to_entry};
use crate::setup::open_database;

/// `SQLite` implementation of the `PokemonSource` trait.
///
/// Holds only the database path. Each lookup opens a read-only connection,
/// runs one parameterized query and closes the connection before returning.
pub struct SqlitePokemonRepository {
    db_path: PathBuf,
}

impl SqlitePokemonRepository {
    /// Create a new `SQLite` pokemon repository for the given file.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    async fn query_by_id(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<PokedexEntry, SourceError> {
        let query =
            format!("SELECT {POKEMON_SELECT_COLUMNS} FROM pokemons WHERE {POKEMON_ID_FILTER}");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| SourceError::Storage {
                message: e.to_string(),
            })?
            .ok_or(SourceError::NotFound { id })?;

        row_to_entry(&row)
    }
}

#[async_trait]
impl PokemonSource for SqlitePokemonRepository {
    async fn fetch(&self, id: i64) -> Result<PokedexEntry, SourceError> {
        debug!(id, path = %self.db_path.display(), "Querying local database");

        let mut conn = open_database(&self.db_path).await.map_err(|e| {
            SourceError::Storage {
                message: format!("cannot open {}: {e}", self.db_path.display()),
            }
        })?;

        let result = Self::query_by_id(&mut conn, id).await;

        if let Err(e) = conn.close().await {
            warn!(error = %e, "Failed to close database connection");
        }

        result
    }
}
