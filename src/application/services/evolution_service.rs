//! Evolution line resolution.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::EvolutionChain;
use crate::domain::repositories::PokeApiRepository;
use crate::error::FetchError;

/// Resolves a species into its evolution line.
pub struct EvolutionService<R: PokeApiRepository> {
    repository: Arc<R>,
}

impl<R: PokeApiRepository> EvolutionService<R> {
    /// Creates a new evolution service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fetches the species at `species_url`, then its evolution chain, and
    /// flattens the chain along its first branch.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of whichever of the two requests fails; there
    /// is no partial result.
    pub async fn resolve(&self, species_url: &str) -> Result<EvolutionChain, FetchError> {
        let species = self.repository.species(species_url).await?;
        let resource = self
            .repository
            .evolution_chain(&species.evolution_chain.url)
            .await?;

        let chain = EvolutionChain::from(&resource);
        debug!("Evolution line of {}: {:?}", species_url, chain.stages());

        Ok(chain)
    }
}
