//! Domain layer: API records, derived values and the data-access contract.
//!
//! # Architecture
//!
//! - [`entities`] - Typed records and derived values
//! - [`repositories`] - Data access trait definitions
//! - [`catalog`] - Fixed species menu and per-type color table
//!
//! The domain layer has no dependency on HTTP or templating; the
//! [`repositories::PokeApiRepository`] contract is implemented by the
//! infrastructure layer.

pub mod catalog;
pub mod entities;
pub mod repositories;
