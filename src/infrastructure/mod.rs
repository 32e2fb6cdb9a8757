//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - `reqwest` client and the PokeAPI repository built on it

pub mod http;
