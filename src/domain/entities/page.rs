//! Everything gathered for one page, before presentation.

use crate::domain::catalog::TypeStyle;

use super::ability::AbilityEffect;
use super::damage::DamageProfile;

/// Aggregated data for one species page.
///
/// Optional values are rendered as `"?"`; everything else is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonPage {
    pub name: String,
    pub sprite_url: String,
    pub type_names: Vec<String>,
    pub style: TypeStyle,
    pub base_experience: Option<u32>,
    pub hp: Option<u32>,
    pub attack: Option<u32>,
    pub defense: Option<u32>,
    pub abilities: Vec<AbilityEffect>,
    pub evolves_next: Vec<String>,
    pub damage: DamageProfile,
}
