//! Species page template.

use askama::Template;

use crate::domain::entities::PokemonPage;
use crate::utils::text::{join_titled, title_case};

/// Placeholder for any numeric value the record did not provide.
pub const MISSING_VALUE: &str = "?";

/// Shown instead of the evolution list at the last stage.
pub const NO_FURTHER_EVOLUTIONS: &str = "No further evolutions.";

/// Shown when a double-damage list is empty.
pub const NO_TYPES: &str = "—";

/// One rendered ability line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityItem {
    pub name: String,
    pub effect: String,
}

/// Template for a species page.
///
/// Renders `templates/pokemon.html`. Every field is a ready-to-print string,
/// so the template itself has no logic beyond the ability loop.
#[derive(Debug, Template)]
#[template(path = "pokemon.html")]
pub struct PokemonTemplate {
    pub title: String,
    pub sprite_url: String,
    pub bg: String,
    pub fg: String,
    pub types: String,
    pub base_experience: String,
    pub hp: String,
    pub attack: String,
    pub defense: String,
    pub abilities: Vec<AbilityItem>,
    pub evolves_next: String,
    pub deals_double_to: String,
    pub takes_double_from: String,
}

fn value_or_missing(value: Option<u32>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), |v| v.to_string())
}

fn list_or(names: &[String], separator: &str, empty: &str) -> String {
    if names.is_empty() {
        empty.to_string()
    } else {
        join_titled(names, separator)
    }
}

impl From<&PokemonPage> for PokemonTemplate {
    fn from(page: &PokemonPage) -> Self {
        Self {
            title: title_case(&page.name),
            sprite_url: page.sprite_url.clone(),
            bg: page.style.bg.to_string(),
            fg: page.style.fg.to_string(),
            types: join_titled(&page.type_names, " , "),
            base_experience: value_or_missing(page.base_experience),
            hp: value_or_missing(page.hp),
            attack: value_or_missing(page.attack),
            defense: value_or_missing(page.defense),
            abilities: page
                .abilities
                .iter()
                .map(|a| AbilityItem {
                    name: title_case(&a.name),
                    effect: a.effect.clone(),
                })
                .collect(),
            evolves_next: list_or(&page.evolves_next, ", ", NO_FURTHER_EVOLUTIONS),
            deals_double_to: list_or(&page.damage.double_damage_to, " , ", NO_TYPES),
            takes_double_from: list_or(&page.damage.double_damage_from, " , ", NO_TYPES),
        }
    }
}

/// Renders the HTML document for `page`.
///
/// Output depends only on `page`: rendering the same data twice yields
/// identical bytes.
///
/// # Errors
///
/// Returns the template engine error, if any.
pub fn render_page(page: &PokemonPage) -> Result<String, askama::Error> {
    PokemonTemplate::from(page).render()
}
