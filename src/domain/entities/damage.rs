//! Type damage relations.

use serde::Deserialize;

use super::pokemon::NamedResource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
}

/// `/type/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeDetail {
    pub damage_relations: DamageRelations,
}

/// Types a type hits for double damage and types that hit it for double damage.
///
/// Names keep the order the API lists them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DamageProfile {
    pub double_damage_to: Vec<String>,
    pub double_damage_from: Vec<String>,
}

fn names(resources: &[NamedResource]) -> Vec<String> {
    resources.iter().map(|r| r.name.clone()).collect()
}

impl From<&TypeDetail> for DamageProfile {
    fn from(detail: &TypeDetail) -> Self {
        Self {
            double_damage_to: names(&detail.damage_relations.double_damage_to),
            double_damage_from: names(&detail.damage_relations.double_damage_from),
        }
    }
}
