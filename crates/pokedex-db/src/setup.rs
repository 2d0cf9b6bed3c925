//! Database connection setup.
//!
//! Lookups only ever read, so production connections are opened read-only
//! and never create a missing file. The schema helpers exist for tests and
//! for building fixture databases.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;

/// SQL for the `pokemons` table.
pub const POKEMONS_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS pokemons (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        height INTEGER NOT NULL,
        weight INTEGER NOT NULL,
        description TEXT
    )
"#;

/// Opens a read-only connection to an existing `SQLite` database file.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be opened.
pub async fn open_database(db_path: &Path) -> Result<SqliteConnection, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true)
        .create_if_missing(false);

    SqliteConnection::connect_with(&options).await
}

/// Creates (if needed) a writable database file with the `pokemons` table.
///
/// # Example
///
/// ```rust,no_run
/// use pokedex_db::setup::create_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let _conn = create_database(Path::new("/tmp/pokedex.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn create_database(db_path: &Path) -> anyhow::Result<SqliteConnection> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);

    let mut conn = SqliteConnection::connect_with(&options).await?;
    sqlx::query(POKEMONS_SCHEMA).execute(&mut conn).await?;
    Ok(conn)
}

/// Inserts one row into the `pokemons` table.
pub async fn insert_pokemon(
    conn: &mut SqliteConnection,
    id: i64,
    name: &str,
    height: i64,
    weight: i64,
    description: Option<&str>,
) -> anyhow::Result<()> {
    sqlx::query(
        "INSERT INTO pokemons (id, name, height, weight, description) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(name)
    .bind(height)
    .bind(weight)
    .bind(description)
    .execute(conn)
    .await?;

    Ok(())
}
