//! Typed API records and the values derived from them.
//!
//! Records mirror the upstream JSON and are deserialized with `serde`. Fields the
//! API may omit are `Option` or `#[serde(default)]`, so defaulting happens once at
//! the deserialization boundary instead of at every use site.
//!
//! # Entity Types
//!
//! - [`PokemonRecord`] - `/pokemon/{name}`
//! - [`AbilityDetail`] / [`AbilityEffect`] - ability lookups and the chosen effect text
//! - [`SpeciesDetail`] / [`EvolutionChainResource`] / [`EvolutionChain`] - evolution line
//! - [`TypeDetail`] / [`DamageProfile`] - double-damage relations
//! - [`PokemonPage`] - the aggregate handed to the template

pub mod ability;
pub mod damage;
pub mod evolution;
pub mod page;
pub mod pokemon;

pub use ability::{
    AbilityDetail, AbilityEffect, EFFECT_UNAVAILABLE, EffectEntry, NO_EFFECT_TEXT,
    select_effect_text,
};
pub use damage::{DamageProfile, DamageRelations, TypeDetail};
pub use evolution::{ChainLink, ChainPosition, EvolutionChain, EvolutionChainResource, SpeciesDetail};
pub use page::PokemonPage;
pub use pokemon::{
    AbilitySlot, NamedResource, PokemonRecord, ResourceLink, Sprites, StatEntry, TypeSlot,
};
