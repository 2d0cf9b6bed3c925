//! PokeAPI client.

use url::Url;

use crate::config::ApiClientConfig;
use crate::error::ApiResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ApiPokemon;
use crate::url::{parse_base_url, pokemon_url};

// ============================================================================
// Type Aliases
// ============================================================================

/// Default PokeAPI client using the reqwest HTTP backend.
pub type DefaultApiClient = ApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the PokeAPI pokemon endpoint.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultApiClient` for production code.
pub struct ApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultApiClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the base URL is unusable or the HTTP client cannot be built.
    pub(crate) fn try_new(config: &ApiClientConfig) -> ApiResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, base_url })
    }
}

impl<B: HttpBackend> ApiClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) fn with_backend(base_url: &str, backend: B) -> Self {
        Self {
            backend,
            base_url: parse_base_url(base_url).unwrap(),
        }
    }

    /// The base URL lookups are issued against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the raw pokemon document for `id`.
    pub(crate) async fn get_pokemon(&self, id: i64) -> ApiResult<ApiPokemon> {
        let url = pokemon_url(&self.base_url, id)?;
        self.backend.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    #[test]
    fn test_default_client_creation() {
        let client = DefaultApiClient::try_new(&ApiClientConfig::new()).unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://pokeapi.co/api/v2/pokemon"
        );
    }

    #[test]
    fn test_client_rejects_bad_base_url() {
        let config = ApiClientConfig::new().with_base_url("::nope::");
        assert!(matches!(
            DefaultApiClient::try_new(&config),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_get_pokemon_hits_id_url() {
        let backend = FakeBackend::new().with_response(
            "/pokemon/1",
            CannedResponse::Json(json!({
                "id": 1, "name": "bulbasaur", "height": 7, "weight": 69
            })),
        );
        let client = ApiClient::with_backend("https://pokeapi.co/api/v2/pokemon", backend);

        let pokemon = client.get_pokemon(1).await.unwrap();
        assert_eq!(pokemon.name, "bulbasaur");
        assert_eq!(
            client.backend.requests(),
            vec!["https://pokeapi.co/api/v2/pokemon/1".to_string()]
        );
    }
}
