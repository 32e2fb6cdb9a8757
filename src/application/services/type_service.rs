//! Type damage-relation lookup.

use std::sync::Arc;

use crate::domain::entities::DamageProfile;
use crate::domain::repositories::PokeApiRepository;
use crate::error::FetchError;

/// Service for type matchups.
pub struct TypeService<R: PokeApiRepository> {
    repository: Arc<R>,
}

impl<R: PokeApiRepository> TypeService<R> {
    /// Creates a new type service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Double-damage relations of `type_name`.
    ///
    /// # Errors
    ///
    /// Propagates the [`FetchError`] of the type lookup.
    pub async fn damage_profile(&self, type_name: &str) -> Result<DamageProfile, FetchError> {
        let detail = self.repository.type_detail(type_name).await?;
        Ok(DamageProfile::from(&detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TypeDetail;
    use crate::domain::repositories::MockPokeApiRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_damage_profile() {
        let mut mock_repo = MockPokeApiRepository::new();

        mock_repo
            .expect_type_detail()
            .withf(|name| name == "grass")
            .times(1)
            .returning(|_| {
                let detail: TypeDetail = serde_json::from_value(json!({
                    "name": "grass",
                    "damage_relations": {
                        "double_damage_to": [ { "name": "water", "url": "" } ],
                        "double_damage_from": [ { "name": "grass", "url": "" } ]
                    }
                }))
                .unwrap();
                Ok(detail)
            });

        let service = TypeService::new(Arc::new(mock_repo));

        let profile = service.damage_profile("grass").await.unwrap();

        assert_eq!(profile.double_damage_to, vec!["water"]);
        assert_eq!(profile.double_damage_from, vec!["grass"]);
    }

    #[tokio::test]
    async fn test_damage_profile_failure() {
        let mut mock_repo = MockPokeApiRepository::new();

        mock_repo
            .expect_type_detail()
            .times(1)
            .returning(|_| Err(FetchError::network("https://pokeapi.co/api/v2/type/fire", "reset")));

        let service = TypeService::new(Arc::new(mock_repo));

        let result = service.damage_profile("fire").await;

        assert!(matches!(result, Err(FetchError::Network { .. })));
    }
}
