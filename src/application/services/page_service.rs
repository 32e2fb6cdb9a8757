//! Page assembly: one pokemon record in, everything the template needs out.

use std::sync::Arc;

use tracing::info;

use crate::application::services::{AbilityService, EvolutionService, TypeService};
use crate::domain::catalog::TypeStyle;
use crate::domain::entities::{PokemonPage, PokemonRecord};
use crate::domain::repositories::PokeApiRepository;
use crate::error::FetchError;

/// Orchestrates the lookups behind one species page.
///
/// All requests are issued sequentially: abilities first (one per ability),
/// then species and evolution chain, then the primary type.
pub struct PageService<R: PokeApiRepository> {
    repository: Arc<R>,
    abilities: AbilityService<R>,
    evolutions: EvolutionService<R>,
    types: TypeService<R>,
}

impl<R: PokeApiRepository> PageService<R> {
    /// Creates a page service; the sub-services share `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            abilities: AbilityService::new(repository.clone()),
            evolutions: EvolutionService::new(repository.clone()),
            types: TypeService::new(repository.clone()),
            repository,
        }
    }

    /// Fetches the primary record for `name`.
    ///
    /// # Errors
    ///
    /// Propagates the [`FetchError`] of the lookup.
    pub async fn fetch_pokemon(&self, name: &str) -> Result<PokemonRecord, FetchError> {
        info!("Fetching pokemon {}", name);
        self.repository.pokemon(name).await
    }

    /// Gathers abilities, evolution line and damage relations for `record`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MissingField`] when the record lists no type, and
    /// propagates failures of the species, evolution-chain and type lookups.
    /// Ability failures never surface here.
    pub async fn assemble(&self, record: &PokemonRecord) -> Result<PokemonPage, FetchError> {
        let primary_type = record
            .primary_type()
            .ok_or_else(|| FetchError::MissingField {
                resource: record.name.clone(),
                field: "types",
            })?
            .to_string();

        info!("Resolving {} abilities of {}", record.abilities.len(), record.name);
        let abilities = self.abilities.enrich(&record.abilities).await;

        info!("Resolving evolution line of {}", record.name);
        let chain = self.evolutions.resolve(&record.species.url).await?;
        let evolves_next = chain.evolves_next(&record.name);

        info!("Resolving damage relations of {}", primary_type);
        let damage = self.types.damage_profile(&primary_type).await?;

        Ok(PokemonPage {
            name: record.name.clone(),
            sprite_url: record.sprite_url().to_string(),
            type_names: record.type_names().into_iter().map(String::from).collect(),
            style: TypeStyle::for_type(&primary_type),
            base_experience: record.base_experience,
            hp: record.stat("hp"),
            attack: record.stat("attack"),
            defense: record.stat("defense"),
            abilities,
            evolves_next,
            damage,
        })
    }
}
