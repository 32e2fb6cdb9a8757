//! Application layer services implementing the page pipeline.
//!
//! Services consume the [`crate::domain::repositories::PokeApiRepository`] trait
//! and never touch HTTP directly, so each one is tested against `mockall` mocks.
//!
//! # Available Services
//!
//! - [`services::ability_service::AbilityService`] - Ability effect text, failures isolated per ability
//! - [`services::evolution_service::EvolutionService`] - Species to evolution line
//! - [`services::type_service::TypeService`] - Double-damage relations of a type
//! - [`services::page_service::PageService`] - Orchestrates the above into a [`crate::domain::entities::PokemonPage`]

pub mod services;
