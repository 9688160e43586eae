use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{GenerationConfig, render_prompt};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::config::{LlmProvider, LlmSettings};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_AZURE_API_VERSION: &str = "2024-06-01";

/// Chat-completions client for OpenAI and API-compatible servers
/// (LM Studio, Ollama, Azure OpenAI).
pub struct OpenAiClient {
    client: Client,
    provider: LlmProvider,
    base_url: String,
    api_key: String,
    azure_api_version: String,
}

#[derive(Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

impl ChatCompletionResponse {
    /// Text of the first choice, trimmed. `None` when there is nothing usable.
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
    }
}

impl OpenAiClient {
    fn completions_url(&self, model: &str) -> String {
        match self.provider {
            LlmProvider::Azure => format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                self.base_url, model, self.azure_api_version
            ),
            _ => format!("{}/chat/completions", self.base_url),
        }
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.provider {
            LlmProvider::Azure => request.header("api-key", &self.api_key),
            _ if self.api_key.is_empty() => request,
            _ => request.header("Authorization", format!("Bearer {}", self.api_key)),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    #[tracing::instrument(skip_all, fields(model = %config.model_name, provider = %self.provider))]
    async fn generate(
        &self,
        prompt_template: &str,
        content: &str,
        config: &GenerationConfig,
    ) -> Result<String, LlmClientError> {
        let prompt = render_prompt(prompt_template, content);
        tracing::debug!(prompt = %sanitize_prompt(&prompt), "Sending completion request");

        let request_body = ChatCompletionRequest {
            model: config.model_name.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Some(prompt),
            }],
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        };

        let request = self
            .client
            .post(self.completions_url(&config.model_name))
            .json(&request_body);
        let response = self
            .apply_auth(request)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::RateLimited(body));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        completion
            .first_content()
            .ok_or_else(|| LlmClientError::InvalidResponse("empty completion".to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("base_url is required for the {0} provider")]
    MissingBaseUrl(LlmProvider),
    #[error("azure_endpoint is required for the azure provider")]
    MissingAzureEndpoint,
    #[error("api_key is required for the {0} provider")]
    MissingApiKey(LlmProvider),
    #[error("http client initialization failed: {0}")]
    HttpClient(String),
}

pub fn create_llm_client(settings: &LlmSettings) -> Result<OpenAiClient, LlmClientFactoryError> {
    let provider = settings.provider;

    let base_url = match provider {
        LlmProvider::OpenAi => settings
            .base_url
            .clone()
            .unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
        LlmProvider::LmStudio | LlmProvider::Ollama => settings
            .base_url
            .clone()
            .ok_or(LlmClientFactoryError::MissingBaseUrl(provider))?,
        LlmProvider::Azure => settings
            .azure_endpoint
            .clone()
            .ok_or(LlmClientFactoryError::MissingAzureEndpoint)?,
    };

    if matches!(provider, LlmProvider::OpenAi | LlmProvider::Azure) && settings.api_key.is_empty()
    {
        return Err(LlmClientFactoryError::MissingApiKey(provider));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .build()
        .map_err(|e| LlmClientFactoryError::HttpClient(e.to_string()))?;

    tracing::info!(%provider, base_url = %base_url, "Configured LLM client");

    Ok(OpenAiClient {
        client,
        provider,
        base_url: base_url.trim_end_matches('/').to_string(),
        api_key: settings.api_key.clone(),
        azure_api_version: settings
            .azure_api_version
            .clone()
            .unwrap_or_else(|| DEFAULT_AZURE_API_VERSION.to_string()),
    })
}
