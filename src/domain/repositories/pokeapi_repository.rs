//! Repository trait for PokeAPI resources.

use crate::domain::entities::{
    AbilityDetail, EvolutionChainResource, PokemonRecord, SpeciesDetail, TypeDetail,
};
use crate::error::FetchError;
use async_trait::async_trait;

/// Read-only access to the PokeAPI resources one page needs.
///
/// Resources addressed by name are resolved against the configured base URL;
/// the others take the absolute URL embedded in a previously fetched record.
/// Every call is an independent request: nothing is cached or retried.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpPokeApiRepository`] - `reqwest` implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokeApiRepository: Send + Sync {
    /// Fetches `/pokemon/{name}`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] on transport failure, non-2xx status or an
    /// undecodable body.
    async fn pokemon(&self, name: &str) -> Result<PokemonRecord, FetchError>;

    /// Fetches an ability detail from the URL listed in a pokemon record.
    async fn ability(&self, url: &str) -> Result<AbilityDetail, FetchError>;

    /// Fetches a species record from the URL listed in a pokemon record.
    async fn species(&self, url: &str) -> Result<SpeciesDetail, FetchError>;

    /// Fetches an evolution chain from the URL listed in a species record.
    async fn evolution_chain(&self, url: &str) -> Result<EvolutionChainResource, FetchError>;

    /// Fetches `/type/{name}`.
    async fn type_detail(&self, name: &str) -> Result<TypeDetail, FetchError>;
}
