use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::GenerationConfig;

/// Answers every request with the same text. Used for offline runs.
pub struct MockLlmClient {
    response: String,
    calls: AtomicUsize,
}

impl MockLlmClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new("Mock answer")
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(
        &self,
        _prompt_template: &str,
        _content: &str,
        _config: &GenerationConfig,
    ) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}
