//! The `/pokemon/{name}` record and the shared resource reference shapes.

use serde::Deserialize;

/// A named reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// An unnamed reference (e.g. `evolution_chain: { url }`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceLink {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

/// Sprite URLs; any of them may be null upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub front_female: Option<String>,
}

impl Sprites {
    /// Female front, then shiny front, then default front, else empty.
    pub fn preferred(&self) -> &str {
        [&self.front_female, &self.front_shiny, &self.front_default]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// One game-form pokemon as returned by `/pokemon/{name}`.
///
/// Everything the API may omit is defaulted here so callers never deal with
/// missing keys.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    pub species: NamedResource,
}

impl PokemonRecord {
    /// The first listed type.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(|t| t.kind.name.as_str())
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.kind.name.as_str()).collect()
    }

    /// Base value of the stat with the given name, if listed.
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat.name == name)
            .map(|s| s.base_stat)
    }

    pub fn sprite_url(&self) -> &str {
        self.sprites.preferred()
    }
}
