//! Row mapping helpers for `SQLite` queries.

use pokedex_core::{PokedexEntry, Pokemon, SourceError};
use sqlx::Row;

/// Shared SELECT column list for pokemon queries.
///
/// Columns are cast so rows from loosely typed tables (numbers stored as
/// TEXT or REAL) decode the same as rows from the typed schema.
pub const POKEMON_SELECT_COLUMNS: &str = "CAST(id AS INTEGER) AS id, \
     CAST(name AS TEXT) AS name, \
     CAST(height AS INTEGER) AS height, \
     CAST(weight AS INTEGER) AS weight, \
     CAST(description AS TEXT) AS description";

/// Row filter matching the cast `id` column.
pub const POKEMON_ID_FILTER: &str = "CAST(id AS INTEGER) = ?";

/// Parse a database row into an entry.
///
/// A `NULL` or empty `description` yields a basic entry.
pub fn row_to_entry(row: &sqlx::sqlite::SqliteRow) -> Result<PokedexEntry, SourceError> {
    let pokemon = Pokemon {
        id: row.try_get::<i64, _>("id").map_err(storage_error)?,
        name: row.try_get("name").map_err(storage_error)?,
        height: row.try_get::<i64, _>("height").map_err(storage_error)?,
        weight: row.try_get::<i64, _>("weight").map_err(storage_error)?,
    };

    let description: Option<String> = row.try_get("description").map_err(storage_error)?;

    Ok(PokedexEntry::new(pokemon, description))
}

fn storage_error(e: sqlx::Error) -> SourceError {
    SourceError::Storage {
        message: e.to_string(),
    }
}
