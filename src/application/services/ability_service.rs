//! Ability effect enrichment.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{AbilityEffect, AbilitySlot};
use crate::domain::repositories::PokeApiRepository;

/// Looks up the effect text of every ability a pokemon lists.
pub struct AbilityService<R: PokeApiRepository> {
    repository: Arc<R>,
}

impl<R: PokeApiRepository> AbilityService<R> {
    /// Creates a new ability service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Produces one [`AbilityEffect`] per slot, in slot order.
    ///
    /// Details are fetched one after another. A failed lookup only affects its
    /// own entry, whose effect becomes `"Effect unavailable."`; this never fails.
    pub async fn enrich(&self, slots: &[AbilitySlot]) -> Vec<AbilityEffect> {
        let mut effects = Vec::with_capacity(slots.len());

        for slot in slots {
            let name = &slot.ability.name;

            let effect = match self.repository.ability(&slot.ability.url).await {
                Ok(detail) => {
                    debug!("Ability {} resolved", name);
                    AbilityEffect::new(name.as_str(), detail.effect_text())
                }
                Err(e) => {
                    warn!("Ability {} unavailable: {}", name, e);
                    AbilityEffect::unavailable(name.as_str())
                }
            };

            effects.push(effect);
        }

        effects
    }
}
