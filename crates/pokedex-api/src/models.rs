//! Wire types for PokeAPI responses.
//!
//! Only the fields the lookup needs are declared; serde ignores the rest of
//! the (very large) pokemon document.

use pokedex_core::Pokemon;
use serde::Deserialize;

/// The subset of `GET /api/v2/pokemon/{id}` we read.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPokemon {
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub weight: i64,
}

impl From<ApiPokemon> for Pokemon {
    fn from(api: ApiPokemon) -> Self {
        Self {
            id: api.id,
            name: api.name,
            height: api.height,
            weight: api.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let body = json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "abilities": [{"ability": {"name": "static"}}]
        });

        let api: ApiPokemon = serde_json::from_value(body).unwrap();
        let pokemon = Pokemon::from(api);
        assert_eq!(pokemon, Pokemon::new(25, "pikachu", 4, 60));
    }

    #[test]
    fn test_deserialize_requires_all_fields() {
        let body = json!({"id": 25, "name": "pikachu", "height": 4});
        let result: Result<ApiPokemon, _> = serde_json::from_value(body);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("weight"));
    }

    #[test]
    fn test_deserialize_rejects_mistyped_field() {
        let body = json!({"id": "25", "name": "pikachu", "height": 4, "weight": 60});
        let result: Result<ApiPokemon, _> = serde_json::from_value(body);
        assert!(result.is_err());
    }
}
