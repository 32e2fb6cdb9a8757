//! HTML output.
//!
//! Uses Askama templates from `templates/` with automatic HTML escaping.

pub mod page;

pub use page::{PokemonTemplate, render_page};
