//! URL construction for PokeAPI lookups.

use url::Url;

use crate::error::{ApiError, ApiResult};

/// Parse and validate the configured base URL.
pub fn parse_base_url(base_url: &str) -> ApiResult<Url> {
    let url = Url::parse(base_url)?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
        });
    }
    Ok(url)
}

/// Build `{base_url}/{id}`, tolerating a trailing slash on the base.
pub fn pokemon_url(base_url: &Url, id: i64) -> ApiResult<Url> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|()| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
        })?
        .pop_if_empty()
        .push(&id.to_string());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_url_appends_id() {
        let base = parse_base_url("https://pokeapi.co/api/v2/pokemon").unwrap();
        let url = pokemon_url(&base, 25).unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/25");
    }

    #[test]
    fn test_pokemon_url_with_trailing_slash() {
        let base = parse_base_url("https://pokeapi.co/api/v2/pokemon/").unwrap();
        let url = pokemon_url(&base, 151).unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/151");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_parse_base_url_rejects_cannot_be_a_base() {
        assert!(matches!(
            parse_base_url("mailto:ash@example.com"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
    }
}
