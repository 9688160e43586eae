use async_trait::async_trait;

use crate::domain::{StoredThread, Thread, ThreadId, UserId};

use super::RepositoryError;

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn save(
        &self,
        user_id: Option<UserId>,
        thread: Thread,
    ) -> Result<StoredThread, RepositoryError>;

    async fn get(&self, id: ThreadId) -> Result<Option<StoredThread>, RepositoryError>;

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<StoredThread>, RepositoryError>;

    /// Deletes the thread if it belongs to `user_id`. Returns whether a row was removed.
    async fn delete(&self, id: ThreadId, user_id: &UserId) -> Result<bool, RepositoryError>;
}
