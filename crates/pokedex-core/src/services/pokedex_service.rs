//! Pokedex service - orchestrates a single lookup against a data source.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::PokedexEntry;
use crate::ports::{CoreError, PokemonSource};

/// Service for record lookups.
pub struct PokedexService {
    source: Arc<dyn PokemonSource>,
}

impl PokedexService {
    /// Create a new pokedex service over the given source.
    pub fn new(source: Arc<dyn PokemonSource>) -> Self {
        Self { source }
    }

    /// Look up a single record by id.
    ///
    /// Any integer is passed through to the source; ids with no record
    /// come back as `SourceError::NotFound`.
    pub async fn lookup(&self, id: i64) -> Result<PokedexEntry, CoreError> {
        debug!(id, "Looking up pokemon");
        match self.source.fetch(id).await {
            Ok(entry) => {
                debug!(id, detailed = entry.has_detail(), "Lookup succeeded");
                Ok(entry)
            }
            Err(e) => {
                warn!(id, error = %e, "Lookup failed");
                Err(e.into())
            }
        }
    }
}
