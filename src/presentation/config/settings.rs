use std::fmt;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::domain::GenerationConfig;

use super::Environment;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub llm: LlmSettings,
    /// Defaults for every generation run; per-user records start from these.
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: String,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    pub azure_api_version: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: LlmProvider::OpenAi,
            api_key: String::new(),
            base_url: None,
            azure_endpoint: None,
            azure_api_version: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "lmstudio")]
    LmStudio,
    Ollama,
    Azure,
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OpenAi => "openai",
            Self::LmStudio => "lmstudio",
            Self::Ollama => "ollama",
            Self::Azure => "azure",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json_format: bool,
}

impl Settings {
    /// Layers `appsettings.toml`, `appsettings.{environment}.toml` and
    /// `APP__SECTION__KEY` environment variables, later sources winning.
    /// An empty `llm.api_key` falls back to `OPENAI_API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let mut settings: Settings = Config::builder()
            .add_source(File::with_name("appsettings").required(false))
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if settings.llm.api_key.is_empty() {
            if let Ok(key) = std::env::var("OPENAI_API_KEY") {
                settings.llm.api_key = key;
            }
        }

        settings
            .generation
            .validate()
            .map_err(|e| ConfigError::Message(format!("generation: {e}")))?;

        Ok(settings)
    }
}
