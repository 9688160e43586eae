use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{ConfigRepository, RepositoryError};
use crate::domain::{GenerationConfig, GenerationConfigUpdate, UserId};

/// Per-user generation settings layered over process-wide defaults.
///
/// A user's first read stores a copy of the defaults as their record, so
/// later changes to the defaults do not leak into existing users.
pub struct InMemoryConfigRepository {
    defaults: GenerationConfig,
    records: RwLock<HashMap<UserId, GenerationConfig>>,
}

impl InMemoryConfigRepository {
    pub fn new(defaults: GenerationConfig) -> Self {
        Self {
            defaults,
            records: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ConfigRepository for InMemoryConfigRepository {
    async fn get_config(
        &self,
        user_id: Option<&UserId>,
    ) -> Result<GenerationConfig, RepositoryError> {
        let Some(user_id) = user_id else {
            return Ok(self.defaults.clone());
        };

        if let Some(config) = self.records.read().await.get(user_id) {
            return Ok(config.clone());
        }

        tracing::debug!(user_id = %user_id, "Creating default configuration record");
        let mut records = self.records.write().await;
        let config = records
            .entry(user_id.clone())
            .or_insert_with(|| self.defaults.clone());
        Ok(config.clone())
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_config(
        &self,
        user_id: &UserId,
        update: GenerationConfigUpdate,
    ) -> Result<GenerationConfig, RepositoryError> {
        let mut records = self.records.write().await;
        let current = records.get(user_id).unwrap_or(&self.defaults);

        let updated = current.apply(update);
        updated.validate()?;

        records.insert(user_id.clone(), updated.clone());
        tracing::info!("Configuration updated");
        Ok(updated)
    }
}
