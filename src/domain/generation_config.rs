use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::prompt_template::placeholder_count;

pub const TITLE_PROMPT_KEY: &str = "title";
pub const THREAD_PROMPT_KEY: &str = "thread";

/// Upper bound on how many raw characters may feed the title prompt.
pub const MAX_TITLE_SLICE_CHARS: usize = 1000;
pub const MAX_POSTS_LIMIT: usize = 10;

const DEFAULT_TITLE_PROMPT: &str = "Summarize the following content into a thread title that would grab attention on social media: {content}";
const DEFAULT_THREAD_PROMPT: &str = "Create a single engaging thread post from this content. Format it as a thread with line breaks between key points, use emojis where appropriate, and make it conversational: {content}";

/// Which text the title prompt is filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "strategy")]
pub enum TitleSource {
    #[default]
    FirstThreadChunk,
    LeadingCharacters { chars: usize },
}

/// What the composer does when generating a single post fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostFailurePolicy {
    #[default]
    Abort,
    Skip,
}

/// Parameters for one generation run. Read-only while a run is in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub model_name: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub max_chunks: usize,
    pub thread_chunk_size: usize,
    pub thread_chunk_overlap: usize,
    pub max_posts: usize,
    pub title_source: TitleSource,
    pub post_failure_policy: PostFailurePolicy,
    #[serde(deserialize_with = "prompts_over_defaults")]
    pub prompts: BTreeMap<String, String>,
}

fn default_prompts() -> BTreeMap<String, String> {
    BTreeMap::from([
        (TITLE_PROMPT_KEY.to_string(), DEFAULT_TITLE_PROMPT.to_string()),
        (THREAD_PROMPT_KEY.to_string(), DEFAULT_THREAD_PROMPT.to_string()),
    ])
}

/// Prompt entries given in configuration override the defaults key by key.
fn prompts_over_defaults<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = BTreeMap::<String, String>::deserialize(deserializer)?;
    let mut prompts = default_prompts();
    prompts.extend(overrides);
    Ok(prompts)
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model_name: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 1000,
            chunk_size: 2000,
            chunk_overlap: 100,
            max_chunks: 10,
            thread_chunk_size: 1000,
            thread_chunk_overlap: 0,
            max_posts: 5,
            title_source: TitleSource::default(),
            post_failure_policy: PostFailurePolicy::default(),
            prompts: default_prompts(),
        }
    }
}

impl GenerationConfig {
    pub fn title_prompt(&self) -> Result<&str, ConfigurationError> {
        self.prompt(TITLE_PROMPT_KEY)
    }

    pub fn thread_prompt(&self) -> Result<&str, ConfigurationError> {
        self.prompt(THREAD_PROMPT_KEY)
    }

    fn prompt(&self, key: &'static str) -> Result<&str, ConfigurationError> {
        self.prompts
            .get(key)
            .map(String::as_str)
            .ok_or(ConfigurationError::MissingPrompt(key))
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.model_name.trim().is_empty() {
            return Err(ConfigurationError::EmptyModelName);
        }

        if !self.temperature.is_finite() || !(0.0..=1.0).contains(&self.temperature) {
            return Err(ConfigurationError::TemperatureOutOfRange(self.temperature));
        }

        if self.max_tokens == 0 {
            return Err(ConfigurationError::MustBePositive("max_tokens"));
        }

        check_chunking("chunk_size", self.chunk_size, "chunk_overlap", self.chunk_overlap)?;
        check_chunking(
            "thread_chunk_size",
            self.thread_chunk_size,
            "thread_chunk_overlap",
            self.thread_chunk_overlap,
        )?;

        if self.max_chunks == 0 {
            return Err(ConfigurationError::MustBePositive("max_chunks"));
        }

        if self.max_posts == 0 || self.max_posts > MAX_POSTS_LIMIT {
            return Err(ConfigurationError::MaxPostsOutOfRange(self.max_posts));
        }

        if let TitleSource::LeadingCharacters { chars } = self.title_source {
            if chars == 0 || chars > MAX_TITLE_SLICE_CHARS {
                return Err(ConfigurationError::TitleSliceOutOfRange(chars));
            }
        }

        for key in [TITLE_PROMPT_KEY, THREAD_PROMPT_KEY] {
            let template = self.prompt(key)?;
            let found = placeholder_count(template);
            if found != 1 {
                return Err(ConfigurationError::PlaceholderCount { key, found });
            }
        }

        Ok(())
    }

    /// Overrides every field set in `update`. Prompt entries are merged, not replaced.
    pub fn apply(&self, update: GenerationConfigUpdate) -> Self {
        let mut config = self.clone();

        if let Some(model_name) = update.model_name {
            config.model_name = model_name;
        }
        if let Some(temperature) = update.temperature {
            config.temperature = temperature;
        }
        if let Some(max_tokens) = update.max_tokens {
            config.max_tokens = max_tokens;
        }
        if let Some(chunk_size) = update.chunk_size {
            config.chunk_size = chunk_size;
        }
        if let Some(chunk_overlap) = update.chunk_overlap {
            config.chunk_overlap = chunk_overlap;
        }
        if let Some(max_chunks) = update.max_chunks {
            config.max_chunks = max_chunks;
        }
        if let Some(thread_chunk_size) = update.thread_chunk_size {
            config.thread_chunk_size = thread_chunk_size;
        }
        if let Some(thread_chunk_overlap) = update.thread_chunk_overlap {
            config.thread_chunk_overlap = thread_chunk_overlap;
        }
        if let Some(max_posts) = update.max_posts {
            config.max_posts = max_posts;
        }
        if let Some(title_source) = update.title_source {
            config.title_source = title_source;
        }
        if let Some(policy) = update.post_failure_policy {
            config.post_failure_policy = policy;
        }
        if let Some(prompts) = update.prompts {
            config.prompts.extend(prompts);
        }

        config
    }
}

fn check_chunking(
    size_field: &'static str,
    size: usize,
    overlap_field: &'static str,
    overlap: usize,
) -> Result<(), ConfigurationError> {
    if size == 0 {
        return Err(ConfigurationError::MustBePositive(size_field));
    }
    if overlap >= size {
        return Err(ConfigurationError::OverlapTooLarge {
            overlap_field,
            overlap,
            size_field,
            size,
        });
    }
    Ok(())
}

/// Partial configuration change, as submitted by a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfigUpdate {
    pub model_name: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub chunk_size: Option<usize>,
    pub chunk_overlap: Option<usize>,
    pub max_chunks: Option<usize>,
    pub thread_chunk_size: Option<usize>,
    pub thread_chunk_overlap: Option<usize>,
    pub max_posts: Option<usize>,
    pub title_source: Option<TitleSource>,
    pub post_failure_policy: Option<PostFailurePolicy>,
    pub prompts: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("model_name must not be empty")]
    EmptyModelName,
    #[error("temperature must be within [0, 1], got {0}")]
    TemperatureOutOfRange(f32),
    #[error("{0} must be greater than zero")]
    MustBePositive(&'static str),
    #[error("{overlap_field} ({overlap}) must be smaller than {size_field} ({size})")]
    OverlapTooLarge {
        overlap_field: &'static str,
        overlap: usize,
        size_field: &'static str,
        size: usize,
    },
    #[error("max_posts must be within 1..=10, got {0}")]
    MaxPostsOutOfRange(usize),
    #[error("title slice must be within 1..=1000 chars, got {0}")]
    TitleSliceOutOfRange(usize),
    #[error("missing prompt template: {0}")]
    MissingPrompt(&'static str),
    #[error("prompt template {key} must contain exactly one {{content}} placeholder, found {found}")]
    PlaceholderCount { key: &'static str, found: usize },
}
