//! Species records, evolution-chain resources and the linear chain derived from them.

use serde::Deserialize;

use super::pokemon::{NamedResource, ResourceLink};

/// `/pokemon-species/{id}`; only the link to the evolution chain is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpeciesDetail {
    pub evolution_chain: ResourceLink,
}

/// One node of the evolution tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// `/evolution-chain/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EvolutionChainResource {
    pub chain: ChainLink,
}

/// Where a species sits within an [`EvolutionChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainPosition {
    Found(usize),
    NotFound,
}

/// Species names from the base stage onwards.
///
/// Only the first listed branch is followed at every node, so alternate
/// evolutions (e.g. eevee's) are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvolutionChain {
    stages: Vec<String>,
}

impl EvolutionChain {
    /// How many upcoming stages the page lists.
    pub const NEXT_STAGES: usize = 2;

    pub fn new(stages: Vec<String>) -> Self {
        Self { stages }
    }

    /// Walks the chain from its root, taking the first child until a leaf.
    pub fn from_root(root: &ChainLink) -> Self {
        let mut stages = Vec::new();
        let mut node = Some(root);

        while let Some(link) = node {
            stages.push(link.species.name.clone());
            node = link.evolves_to.first();
        }

        Self { stages }
    }

    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn position_of(&self, species: &str) -> ChainPosition {
        match self.stages.iter().position(|s| s == species) {
            Some(index) => ChainPosition::Found(index),
            None => ChainPosition::NotFound,
        }
    }

    /// Up to two stages after `species`.
    ///
    /// When `species` is not part of the chain, stages 1 and 2 (everything
    /// after the base stage) are returned instead.
    pub fn evolves_next(&self, species: &str) -> Vec<String> {
        let start = match self.position_of(species) {
            ChainPosition::Found(index) => index + 1,
            ChainPosition::NotFound => 1,
        };
        self.window(start)
    }

    fn window(&self, start: usize) -> Vec<String> {
        self.stages
            .iter()
            .skip(start)
            .take(Self::NEXT_STAGES)
            .cloned()
            .collect()
    }
}

impl From<&EvolutionChainResource> for EvolutionChain {
    fn from(resource: &EvolutionChainResource) -> Self {
        Self::from_root(&resource.chain)
    }
}
