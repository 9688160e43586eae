use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{RepositoryError, ThreadRepository};
use crate::domain::{StoredThread, Thread, ThreadId, UserId};

#[derive(Default)]
pub struct InMemoryThreadRepository {
    threads: RwLock<HashMap<ThreadId, StoredThread>>,
}

impl InMemoryThreadRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ThreadRepository for InMemoryThreadRepository {
    async fn save(
        &self,
        user_id: Option<UserId>,
        thread: Thread,
    ) -> Result<StoredThread, RepositoryError> {
        let stored = StoredThread::new(user_id, thread);
        self.threads.write().await.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: ThreadId) -> Result<Option<StoredThread>, RepositoryError> {
        Ok(self.threads.read().await.get(&id).cloned())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<StoredThread>, RepositoryError> {
        let mut threads: Vec<StoredThread> = self
            .threads
            .read()
            .await
            .values()
            .filter(|t| t.is_owned_by(Some(user_id)))
            .cloned()
            .collect();
        threads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(threads)
    }

    async fn delete(&self, id: ThreadId, user_id: &UserId) -> Result<bool, RepositoryError> {
        let mut threads = self.threads.write().await;
        match threads.get(&id) {
            Some(stored) if stored.is_owned_by(Some(user_id)) => {
                threads.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
