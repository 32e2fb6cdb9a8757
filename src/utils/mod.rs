//! Utility functions shared by the infrastructure and presentation layers.
//!
//! - [`resource_url`] - URL validation and endpoint construction
//! - [`text`] - Title-casing of API names for display

pub mod resource_url;
pub mod text;
