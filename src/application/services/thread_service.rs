use std::sync::Arc;

use crate::application::ports::{
    ConfigRepository, FileLoader, LlmClient, RepositoryError, TextSplitter, ThreadRepository,
};
use crate::domain::{
    GenerationConfig, GenerationConfigUpdate, RawDocument, StoredThread, ThreadId, UserId,
};

use super::thread_pipeline::{PipelineError, ThreadPipeline};

/// Upload flow around the pipeline: resolve the caller's configuration, run
/// the pipeline, hand the result to the thread store.
pub struct ThreadService<F: ?Sized, S: ?Sized, L: ?Sized> {
    pipeline: Arc<ThreadPipeline<F, S, L>>,
    config_repository: Arc<dyn ConfigRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl<F, S, L> ThreadService<F, S, L>
where
    F: FileLoader + ?Sized,
    S: TextSplitter + ?Sized,
    L: LlmClient + ?Sized,
{
    pub fn new(
        pipeline: Arc<ThreadPipeline<F, S, L>>,
        config_repository: Arc<dyn ConfigRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            pipeline,
            config_repository,
            thread_repository,
        }
    }

    #[tracing::instrument(skip(self, document), fields(path = %document.path.display()))]
    pub async fn generate(
        &self,
        user_id: Option<UserId>,
        document: &RawDocument,
    ) -> Result<StoredThread, ThreadServiceError> {
        let config = self.config_repository.get_config(user_id.as_ref()).await?;
        let thread = self.pipeline.run_document(document, &config).await?;
        let stored = self.thread_repository.save(user_id, thread).await?;

        tracing::info!(
            thread_id = %stored.id,
            post_count = stored.thread.posts.len(),
            "Thread stored"
        );

        Ok(stored)
    }

    pub async fn get_thread(&self, id: ThreadId) -> Result<StoredThread, ThreadServiceError> {
        self.thread_repository
            .get(id)
            .await?
            .ok_or(ThreadServiceError::ThreadNotFound(id))
    }

    pub async fn list_threads(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<StoredThread>, ThreadServiceError> {
        Ok(self.thread_repository.list_for_user(user_id).await?)
    }

    pub async fn delete_thread(
        &self,
        id: ThreadId,
        user_id: &UserId,
    ) -> Result<(), ThreadServiceError> {
        if self.thread_repository.delete(id, user_id).await? {
            Ok(())
        } else {
            Err(ThreadServiceError::ThreadNotFound(id))
        }
    }

    pub async fn config(
        &self,
        user_id: Option<&UserId>,
    ) -> Result<GenerationConfig, ThreadServiceError> {
        Ok(self.config_repository.get_config(user_id).await?)
    }

    pub async fn update_config(
        &self,
        user_id: &UserId,
        update: GenerationConfigUpdate,
    ) -> Result<GenerationConfig, ThreadServiceError> {
        Ok(self.config_repository.update_config(user_id, update).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ThreadServiceError {
    #[error("pipeline: {0}")]
    Pipeline(#[from] PipelineError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("thread not found: {0}")]
    ThreadNotFound(ThreadId),
}
