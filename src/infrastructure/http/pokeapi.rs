//! PokeAPI repository over HTTP.

use async_trait::async_trait;

use super::client::HttpClient;
use crate::domain::entities::{
    AbilityDetail, EvolutionChainResource, PokemonRecord, SpeciesDetail, TypeDetail,
};
use crate::domain::repositories::PokeApiRepository;
use crate::error::FetchError;
use crate::utils::resource_url::endpoint_url;

/// Public PokeAPI v2 root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// [`PokeApiRepository`] backed by [`HttpClient`].
pub struct HttpPokeApiRepository {
    client: HttpClient,
    base_url: String,
}

impl HttpPokeApiRepository {
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<String, FetchError> {
        endpoint_url(&self.base_url, segments)
            .map_err(|e| FetchError::invalid_url(self.base_url.as_str(), e))
    }
}

#[async_trait]
impl PokeApiRepository for HttpPokeApiRepository {
    async fn pokemon(&self, name: &str) -> Result<PokemonRecord, FetchError> {
        let url = self.endpoint(&["pokemon", name])?;
        self.client.get_json(&url).await
    }

    async fn ability(&self, url: &str) -> Result<AbilityDetail, FetchError> {
        self.client.get_json(url).await
    }

    async fn species(&self, url: &str) -> Result<SpeciesDetail, FetchError> {
        self.client.get_json(url).await
    }

    async fn evolution_chain(&self, url: &str) -> Result<EvolutionChainResource, FetchError> {
        self.client.get_json(url).await
    }

    async fn type_detail(&self, name: &str) -> Result<TypeDetail, FetchError> {
        let url = self.endpoint(&["type", name])?;
        self.client.get_json(&url).await
    }
}
