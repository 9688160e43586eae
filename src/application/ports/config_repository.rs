use async_trait::async_trait;

use crate::domain::{GenerationConfig, GenerationConfigUpdate, UserId};

use super::RepositoryError;

#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Returns the configuration for `user_id`, or the process defaults when
    /// no user is given.
    async fn get_config(&self, user_id: Option<&UserId>)
    -> Result<GenerationConfig, RepositoryError>;

    /// Applies a partial update to the user's configuration. The merged
    /// record is validated before anything is stored.
    async fn update_config(
        &self,
        user_id: &UserId,
        update: GenerationConfigUpdate,
    ) -> Result<GenerationConfig, RepositoryError>;
}
