//! Composition utilities for building `SQLite`-backed sources.
//!
//! This module is focused purely on construction and should not contain
//! any lookup logic.

use std::path::PathBuf;
use std::sync::Arc;

use pokedex_core::PokemonSource;

use crate::repositories::SqlitePokemonRepository;

/// Factory for creating data source instances with `SQLite` backends.
pub struct SourceFactory;

impl SourceFactory {
    /// Build a trait-object source reading from the given database file.
    ///
    /// Nothing is opened until the first lookup.
    pub fn pokemon_source(db_path: impl Into<PathBuf>) -> Arc<dyn PokemonSource> {
        Arc::new(SqlitePokemonRepository::new(db_path))
    }
}

/// A throwaway database file with the `pokemons` schema.
///
/// The file lives in a temporary directory that is removed on drop.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    dir: tempfile::TempDir,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    const FILE_NAME: &'static str = "pokedex.db";

    /// Create a new empty test database with the full schema.
    pub async fn new() -> anyhow::Result<Self> {
        use sqlx::Connection;

        let dir = tempfile::tempdir()?;
        let conn = crate::setup::create_database(&dir.path().join(Self::FILE_NAME)).await?;
        conn.close().await?;
        Ok(Self { dir })
    }

    /// Path of the database file.
    pub fn path(&self) -> PathBuf {
        self.dir.path().join(Self::FILE_NAME)
    }

    /// Insert a row, opening and closing a writable connection.
    pub async fn insert(
        &self,
        id: i64,
        name: &str,
        height: i64,
        weight: i64,
        description: Option<&str>,
    ) -> anyhow::Result<()> {
        use sqlx::Connection;

        let mut conn = crate::setup::create_database(&self.path()).await?;
        crate::setup::insert_pokemon(&mut conn, id, name, height, weight, description).await?;
        conn.close().await?;
        Ok(())
    }
}
