//! # Pokedex Page
//!
//! Fetches one Pokémon from [PokeAPI](https://pokeapi.co) and renders it into a
//! standalone HTML page.
//!
//! ## Architecture
//!
//! The pipeline is linear (fetch → assemble → render → write) and split into layers:
//!
//! - **Domain Layer** ([`domain`]) - API records, derived values, fixed tables and the repository trait
//! - **Application Layer** ([`application`]) - Ability, evolution, type and page services
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` client and the PokeAPI repository
//! - **Web Layer** ([`web`]) - Askama template producing the HTML document
//!
//! [`app::generate`] wires them together for one menu choice.
//!
//! ## Failure Policy
//!
//! A failed lookup of the pokemon, its species, its evolution chain or its
//! primary type aborts the run before anything is written. A failed ability
//! lookup only replaces that ability's text with `"Effect unavailable."`.
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;
pub mod web;

pub use error::{AppError, FetchError, InputError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::app::{generate, generate_with, output_path};
    pub use crate::application::services::PageService;
    pub use crate::config::Config;
    pub use crate::domain::catalog::{SpeciesChoice, TypeStyle};
    pub use crate::domain::entities::{AbilityEffect, DamageProfile, EvolutionChain, PokemonPage};
    pub use crate::domain::repositories::PokeApiRepository;
    pub use crate::error::{AppError, FetchError, InputError};
    pub use crate::infrastructure::http::{HttpClient, HttpPokeApiRepository};
}
