//! Repository trait definitions for the domain layer.
//!
//! The application services only see [`PokeApiRepository`]; the HTTP
//! implementation lives in `crate::infrastructure::http`. Mock implementations
//! are auto-generated via `mockall` for testing.
//!
//! # Testing
//!
//! See `tests/http_repository.rs` for the real client against a fixture server.

pub mod pokeapi_repository;

pub use pokeapi_repository::PokeApiRepository;

#[cfg(test)]
pub use pokeapi_repository::MockPokeApiRepository;
