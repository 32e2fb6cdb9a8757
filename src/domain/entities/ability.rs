//! Ability detail records and effect-text selection.

use serde::Deserialize;

use super::pokemon::NamedResource;

/// Shown when an ability has no usable effect text in any language.
pub const NO_EFFECT_TEXT: &str = "No effect text.";

/// Shown when the ability detail could not be fetched at all.
pub const EFFECT_UNAVAILABLE: &str = "Effect unavailable.";

/// Language code preferred for effect text.
pub const PREFERRED_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EffectEntry {
    #[serde(default)]
    pub effect: Option<String>,
    pub language: NamedResource,
}

/// `/ability/{id}` as far as the page needs it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbilityDetail {
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
}

impl AbilityDetail {
    pub fn effect_text(&self) -> String {
        select_effect_text(&self.effect_entries)
    }
}

/// An ability name paired with the effect text chosen for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityEffect {
    pub name: String,
    pub effect: String,
}

impl AbilityEffect {
    pub fn new(name: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            effect: effect.into(),
        }
    }

    pub fn unavailable(name: impl Into<String>) -> Self {
        Self::new(name, EFFECT_UNAVAILABLE)
    }
}

/// Picks the effect text to display.
///
/// The first English entry wins. Without one, the first entry in source order
/// is used. An empty chosen text, or an empty list, yields [`NO_EFFECT_TEXT`].
pub fn select_effect_text(entries: &[EffectEntry]) -> String {
    let chosen = entries
        .iter()
        .find(|e| e.language.name == PREFERRED_LANGUAGE)
        .or_else(|| entries.first());

    match chosen.and_then(|e| e.effect.as_deref()) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => NO_EFFECT_TEXT.to_string(),
    }
}
