mod chunk;
mod document;
mod generation_config;
mod prompt_template;
mod stored_thread;
mod thread;
mod thread_id;
mod user_id;

pub use chunk::TextChunk;
pub use document::{ContentType, RawDocument};
pub use generation_config::{
    ConfigurationError, GenerationConfig, GenerationConfigUpdate, MAX_POSTS_LIMIT,
    MAX_TITLE_SLICE_CHARS, PostFailurePolicy, THREAD_PROMPT_KEY, TITLE_PROMPT_KEY, TitleSource,
};
pub use prompt_template::{CONTENT_PLACEHOLDER, placeholder_count, render_prompt};
pub use stored_thread::StoredThread;
pub use thread::{Post, Thread};
pub use thread_id::ThreadId;
pub use user_id::UserId;
