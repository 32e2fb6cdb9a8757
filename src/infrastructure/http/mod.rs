//! HTTP access to PokeAPI.
//!
//! - [`HttpClient`] - single GET with timeout, status check and JSON decoding
//! - [`HttpPokeApiRepository`] - [`crate::domain::repositories::PokeApiRepository`] over [`HttpClient`]

mod client;
mod pokeapi;

pub use client::{DEFAULT_TIMEOUT, HttpClient};
pub use pokeapi::{DEFAULT_BASE_URL, HttpPokeApiRepository};
