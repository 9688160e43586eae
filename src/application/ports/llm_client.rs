use async_trait::async_trait;

use crate::domain::GenerationConfig;

/// Turns a prompt template plus content into generated text.
///
/// Implementations fill the `{content}` placeholder, issue exactly one request
/// to the model named by `config.model_name`, and never retry.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(
        &self,
        prompt_template: &str,
        content: &str,
        config: &GenerationConfig,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
