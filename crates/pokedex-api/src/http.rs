//! HTTP backend abstraction for PokeAPI.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and sends exactly one request per call.

use crate::config::ApiClientConfig;
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `PokemonSource` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ApiClientConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an already-built client.
    #[cfg(test)]
    pub(crate) const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
        debug!(%url, "GET");
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Decode separately so a bad body is a parse error, not a network error
        let body = response.text().await?;
        let data: T = serde_json::from_str(&body)?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Canned response for the fake backend.
    #[derive(Clone)]
    pub enum CannedResponse {
        /// 200 with a JSON body.
        Json(serde_json::Value),
        /// 200 with a raw (possibly malformed) body.
        Body(String),
        /// A non-success status code.
        Status(u16),
    }

    /// A fake HTTP backend that returns canned responses and records requests.
    pub struct FakeBackend {
        responses: Vec<(String, CannedResponse)>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        /// Create a new fake backend.
        pub fn new() -> Self {
            Self {
                responses: Vec::new(),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Add a canned response for URLs ending with `url_suffix`.
        pub fn with_response(mut self, url_suffix: &str, response: CannedResponse) -> Self {
            self.responses.push((url_suffix.to_string(), response));
            self
        }

        /// URLs requested so far.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Default for FakeBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> ApiResult<T> {
            self.requests.lock().unwrap().push(url.to_string());

            let response = self
                .responses
                .iter()
                .find(|(suffix, _)| url.as_str().ends_with(suffix.as_str()))
                .map_or(CannedResponse::Status(404), |(_, r)| r.clone());

            match response {
                CannedResponse::Json(json) => serde_json::from_value(json).map_err(Into::into),
                CannedResponse::Body(body) => serde_json::from_str(&body).map_err(Into::into),
                CannedResponse::Status(status) => Err(ApiError::ApiRequestFailed {
                    status,
                    url: url.to_string(),
                }),
            }
        }
    }
}
